use strum::{Display, EnumIter};

use crate::domain::format::{MISSING, NumberFormat};
use crate::domain::market_data::{Prediction, Stats};

/// Output fields of the stats panel, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum StatField {
    #[strum(to_string = "Last Close")]
    LastClose,
    #[strum(to_string = "52W High")]
    High52w,
    #[strum(to_string = "52W Low")]
    Low52w,
    #[strum(to_string = "Avg Volume (30D)")]
    AvgVolume30d,
    #[strum(to_string = "RSI (14)")]
    Rsi14,
    #[strum(to_string = "SMA 20")]
    Sma20,
    #[strum(to_string = "SMA 50")]
    Sma50,
    #[strum(to_string = "Predicted Close")]
    PredictedClose,
}

impl StatField {
    pub fn element_id(self) -> &'static str {
        match self {
            StatField::LastClose => "stat_last",
            StatField::High52w => "stat_high",
            StatField::Low52w => "stat_low",
            StatField::AvgVolume30d => "stat_vol",
            StatField::Rsi14 => "stat_rsi",
            StatField::Sma20 => "stat_sma20",
            StatField::Sma50 => "stat_sma50",
            StatField::PredictedClose => "stat_pred",
        }
    }
}

/// Formatted text for every stats field.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsDisplay {
    pub last_close: String,
    pub high_52w: String,
    pub low_52w: String,
    pub avg_volume_30d: String,
    pub rsi_14: String,
    pub sma_20: String,
    pub sma_50: String,
    pub predicted_close: String,
    /// e.g. `LinearRegression · 1d horizon`
    pub prediction_note: Option<String>,
}

impl Default for StatsDisplay {
    fn default() -> Self {
        Self {
            last_close: MISSING.to_string(),
            high_52w: MISSING.to_string(),
            low_52w: MISSING.to_string(),
            avg_volume_30d: MISSING.to_string(),
            rsi_14: MISSING.to_string(),
            sma_20: MISSING.to_string(),
            sma_50: MISSING.to_string(),
            predicted_close: MISSING.to_string(),
            prediction_note: None,
        }
    }
}

impl StatsDisplay {
    pub fn get(&self, field: StatField) -> &str {
        match field {
            StatField::LastClose => &self.last_close,
            StatField::High52w => &self.high_52w,
            StatField::Low52w => &self.low_52w,
            StatField::AvgVolume30d => &self.avg_volume_30d,
            StatField::Rsi14 => &self.rsi_14,
            StatField::Sma20 => &self.sma_20,
            StatField::Sma50 => &self.sma_50,
            StatField::PredictedClose => &self.predicted_close,
        }
    }
}

/// Turns backend stats into panel text. Missing values become `-`, never errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsView {
    format: NumberFormat,
}

impl StatsView {
    pub fn new(format: NumberFormat) -> Self {
        Self { format }
    }

    pub fn update(&self, stats: &Stats, prediction: Option<&Prediction>) -> StatsDisplay {
        let price = |value| self.format.price(value);
        StatsDisplay {
            last_close: price(stats.last_close),
            high_52w: price(stats.high_52w),
            low_52w: price(stats.low_52w),
            avg_volume_30d: self.format.number(stats.avg_volume_30d),
            rsi_14: price(stats.rsi_14),
            sma_20: price(stats.sma_20),
            sma_50: price(stats.sma_50),
            predicted_close: prediction
                .map(|p| price(p.predicted_close))
                .unwrap_or_else(|| MISSING.to_string()),
            prediction_note: prediction.and_then(prediction_note),
        }
    }
}

fn prediction_note(prediction: &Prediction) -> Option<String> {
    match (&prediction.model, prediction.horizon_days) {
        (Some(model), Some(days)) => Some(format!("{} · {}d horizon", model, days)),
        (Some(model), None) => Some(model.clone()),
        (None, Some(days)) => Some(format!("{}d horizon", days)),
        (None, None) => None,
    }
}

use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Domain entity - a listed company. Ticker is unique within a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{} ({})", name, ticker)]
pub struct Company {
    pub name: String,
    pub ticker: String,
}

impl Company {
    pub fn new(name: impl Into<String>, ticker: impl Into<String>) -> Self {
        Self { name: name.into(), ticker: ticker.into() }
    }

    /// Case-insensitive substring match over `name + ticker`.
    /// `needle` must already be lowercase.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let mut haystack = self.name.to_lowercase();
        haystack.push_str(&self.ticker.to_lowercase());
        haystack.contains(needle)
    }
}

/// One point of the close-price series. Order in the response is chronological.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRow {
    pub date: String,
    pub close: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl HistoryRow {
    pub fn new(date: impl Into<String>, close: f64) -> Self {
        Self { date: date.into(), close, open: None, high: None, low: None, volume: None }
    }
}

/// Scalar statistics computed by the backend. Every field is optional and
/// anything that is not a number is read as missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default, deserialize_with = "lenient_number")]
    pub last_close: Option<f64>,
    #[serde(rename = "52w_high", default, deserialize_with = "lenient_number")]
    pub high_52w: Option<f64>,
    #[serde(rename = "52w_low", default, deserialize_with = "lenient_number")]
    pub low_52w: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub avg_volume_30d: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rsi_14: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub sma_20: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub sma_50: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(default, deserialize_with = "lenient_number")]
    pub predicted_close: Option<f64>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub horizon_days: Option<u32>,
}

impl Prediction {
    pub fn new(predicted_close: f64) -> Self {
        Self { predicted_close: Some(predicted_close), ..Self::default() }
    }
}

/// Body of `GET /api/history`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub stats: Stats,
    #[serde(default)]
    pub prediction: Option<Prediction>,
    #[serde(default)]
    pub data: Vec<HistoryRow>,
    #[serde(default)]
    pub company: Option<Company>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub interval: Option<String>,
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }))
}

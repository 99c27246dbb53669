use super::entities::Company;

pub const DEFAULT_PERIOD: &str = "1y";
pub const DEFAULT_INTERVAL: &str = "1d";

/// Choices offered by the period selector.
pub const PERIOD_CHOICES: &[&str] = &["1mo", "3mo", "6mo", "1y", "2y", "5y", "max"];
/// Choices offered by the interval selector.
pub const INTERVAL_CHOICES: &[&str] = &["1d", "1wk", "1mo"];

/// Value Object - period and interval as picked in the UI. Both are passed
/// to the backend verbatim and never interpreted here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    pub period: String,
    pub interval: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::new(DEFAULT_PERIOD, DEFAULT_INTERVAL)
    }
}

impl DisplayOptions {
    pub fn new(period: impl Into<String>, interval: impl Into<String>) -> Self {
        Self { period: period.into(), interval: interval.into() }
    }
}

/// Value Object - one history request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryQuery {
    pub ticker: String,
    pub period: String,
    pub interval: String,
    pub predict: bool,
}

impl HistoryQuery {
    /// The dashboard always asks for a prediction alongside the history.
    pub fn for_company(company: &Company, options: &DisplayOptions) -> Self {
        Self {
            ticker: company.ticker.clone(),
            period: options.period.clone(),
            interval: options.interval.clone(),
            predict: true,
        }
    }
}

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{
    errors::{DashboardError, DashboardResult},
    format::NumberFormat,
    logging::LogLevel,
    market_data::{DEFAULT_INTERVAL, DEFAULT_PERIOD, DisplayOptions},
};

/// Id of the optional `<script type="application/json">` block holding the config.
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

/// Page-level settings. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Prefix for backend paths; empty means same origin.
    pub api_base: String,
    /// num-format locale name, e.g. `en`, `de`, `en-IN`.
    pub locale: String,
    pub default_period: String,
    pub default_interval: String,
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            locale: "en".to_string(),
            default_period: DEFAULT_PERIOD.to_string(),
            default_interval: DEFAULT_INTERVAL.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> DashboardResult<Self> {
        serde_json::from_str(json).map_err(|e| DashboardError::Config(e.to_string()))
    }

    /// Reads the config block from the page. A missing block yields the defaults.
    pub fn load_from_document() -> DashboardResult<Self> {
        let text = gloo::utils::document()
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content());
        match text {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json),
            _ => Ok(Self::default()),
        }
    }

    pub fn number_format(&self) -> NumberFormat {
        NumberFormat::from_locale_name(&self.locale)
    }

    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions::new(self.default_period.clone(), self.default_interval.clone())
    }

    /// Unrecognized names fall back to `Info`.
    pub fn min_log_level(&self) -> LogLevel {
        LogLevel::from_str(self.log_level.trim()).unwrap_or(LogLevel::Info)
    }
}

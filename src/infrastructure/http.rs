use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use url::form_urlencoded;

use crate::domain::{
    errors::{DashboardError, DashboardResult},
    logging::LogComponent,
    market_data::{Company, HistoryQuery, HistoryResponse, MarketDataRepository},
};
use crate::{log_debug, log_error};

pub const COMPANIES_PATH: &str = "/api/companies";
pub const HISTORY_PATH: &str = "/api/history";

/// HTTP client for the dashboard backend. An empty base url keeps requests
/// relative to the page origin.
#[derive(Debug, Clone, Default)]
pub struct HttpMarketDataRepository {
    base_url: String,
}

impl HttpMarketDataRepository {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_string() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn companies_url(&self) -> String {
        format!("{}{}", self.base_url, COMPANIES_PATH)
    }

    /// `ticker`, `period`, `interval` and `predict`, percent-encoded.
    pub fn history_url(&self, query: &HistoryQuery) -> String {
        let params = form_urlencoded::Serializer::new(String::new())
            .append_pair("ticker", &query.ticker)
            .append_pair("period", &query.period)
            .append_pair("interval", &query.interval)
            .append_pair("predict", if query.predict { "true" } else { "false" })
            .finish();
        format!("{}{}?{}", self.base_url, HISTORY_PATH, params)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> DashboardResult<T> {
        log_debug!(LogComponent::Infrastructure("HTTP"), "🌐 GET {}", url);

        let response = Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| DashboardError::Network(format!("Request to {} failed: {}", url, e)))?;

        if !response.ok() {
            log_error!(
                LogComponent::Infrastructure("HTTP"),
                "HTTP error: {} - {} ({})",
                response.status(),
                response.status_text(),
                url
            );
            return Err(DashboardError::Http { status: response.status(), url: url.to_string() });
        }

        let data = response
            .json::<T>()
            .await
            .map_err(|e| DashboardError::Decode(format!("Failed to parse JSON from {}: {}", url, e)))?;

        log_debug!(LogComponent::Infrastructure("HTTP"), "✅ GET {} parsed", url);
        Ok(data)
    }
}

impl MarketDataRepository for HttpMarketDataRepository {
    async fn fetch_companies(&self) -> DashboardResult<Vec<Company>> {
        self.get_json(&self.companies_url()).await
    }

    async fn fetch_history(&self, query: &HistoryQuery) -> DashboardResult<HistoryResponse> {
        self.get_json(&self.history_url(query)).await
    }
}

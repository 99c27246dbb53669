use crate::domain::errors::DashboardResult;
use crate::domain::market_data::{Company, HistoryQuery, HistoryResponse};

/// Source of companies and price history.
///
/// Futures returned here are not `Send`: everything runs on the browser's
/// single UI thread.
#[allow(async_fn_in_trait)]
pub trait MarketDataRepository {
    /// Full company list, in the order the backend returns it.
    async fn fetch_companies(&self) -> DashboardResult<Vec<Company>>;

    /// History, stats and prediction for one ticker. A non-2xx answer is
    /// reported as `DashboardError::Http`.
    async fn fetch_history(&self, query: &HistoryQuery) -> DashboardResult<HistoryResponse>;
}

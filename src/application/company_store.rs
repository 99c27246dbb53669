use crate::application::company_list::{CompanyListItem, list_items};
use crate::domain::errors::DashboardResult;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{Company, MarketDataRepository};
use crate::domain::state::{SharedState, shared_state};
use crate::log_info;

/// Loaded companies plus the selection, backed by the repository that
/// supplies them.
pub struct CompanyStore<R: MarketDataRepository> {
    repository: R,
    state: SharedState,
}

impl<R: MarketDataRepository> CompanyStore<R> {
    pub fn new(repository: R) -> Self {
        Self::with_state(repository, shared_state())
    }

    pub fn with_state(repository: R, state: SharedState) -> Self {
        Self { repository, state }
    }

    /// Replaces the company list with whatever the backend returns.
    /// Failures are passed up untouched.
    pub async fn load(&self) -> DashboardResult<()> {
        let companies = self.repository.fetch_companies().await?;
        log_info!(
            LogComponent::Application("CompanyStore"),
            "Loaded {} companies",
            companies.len()
        );
        self.state.borrow_mut().replace_companies(companies);
        Ok(())
    }

    /// No membership check against the loaded list.
    pub fn select(&self, company: Company) {
        self.state.borrow_mut().select(company);
    }

    pub fn selected(&self) -> Option<Company> {
        self.state.borrow().selected().cloned()
    }

    pub fn first(&self) -> Option<Company> {
        self.state.borrow().companies().first().cloned()
    }

    pub fn list_items(&self, filter: &str) -> Vec<CompanyListItem> {
        list_items(&self.state.borrow(), filter)
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

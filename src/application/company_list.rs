use crate::domain::market_data::Company;
use crate::domain::state::ClientState;

/// One rendered row of the company list.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyListItem {
    pub company: Company,
    pub label: String,
    pub active: bool,
}

/// Companies whose `name + ticker` contains `filter` (case-insensitive), in
/// load order. The entry whose ticker equals the selection is marked active.
pub fn list_items(state: &ClientState, filter: &str) -> Vec<CompanyListItem> {
    let needle = filter.to_lowercase();
    state
        .companies()
        .iter()
        .filter(|company| company.matches_lowercase(&needle))
        .map(|company| CompanyListItem {
            company: company.clone(),
            label: company.to_string(),
            active: state.is_selected(company),
        })
        .collect()
}

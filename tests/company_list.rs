use stock_dashboard_wasm::application::company_list::list_items;
use stock_dashboard_wasm::domain::market_data::Company;
use stock_dashboard_wasm::domain::state::ClientState;

fn state(companies: &[(&str, &str)]) -> ClientState {
    let mut state = ClientState::new();
    state.replace_companies(companies.iter().map(|(name, ticker)| Company::new(*name, *ticker)).collect());
    state
}

fn labels(state: &ClientState, filter: &str) -> Vec<String> {
    list_items(state, filter).into_iter().map(|item| item.label).collect()
}

#[test]
fn filter_is_case_insensitive_substring() {
    let state = state(&[("Acme", "ACM"), ("Beta", "BTA")]);
    assert_eq!(labels(&state, "acm"), vec!["Acme (ACM)".to_string()]);
    assert_eq!(labels(&state, "BTA"), vec!["Beta (BTA)".to_string()]);
    assert!(labels(&state, "zzz").is_empty());
}

#[test]
fn empty_filter_lists_everything_in_load_order() {
    let state = state(&[("Zeta", "ZZZ"), ("Acme", "ACM"), ("Beta", "BTA")]);
    insta::assert_snapshot!(labels(&state, "").join(" | "), @"Zeta (ZZZ) | Acme (ACM) | Beta (BTA)");
}

#[test]
fn only_selected_ticker_is_active() {
    let mut state = state(&[("Acme", "ACM"), ("Beta", "BTA")]);
    state.select(Company::new("Beta Renamed", "BTA"));

    let active: Vec<bool> = list_items(&state, "").iter().map(|item| item.active).collect();
    assert_eq!(active, vec![false, true]);
}

#[test]
fn selection_outside_filter_shows_no_active_entry() {
    let mut state = state(&[("Acme", "ACM"), ("Beta", "BTA")]);
    state.select(Company::new("Beta", "BTA"));

    let items = list_items(&state, "acme");
    assert_eq!(items.len(), 1);
    assert!(!items[0].active);
}

use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::market_data::Company;

/// Session state: the loaded companies and the current selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientState {
    companies: Vec<Company>,
    selected: Option<Company>,
}

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    /// Replaces the whole list; loads never merge.
    pub fn replace_companies(&mut self, companies: Vec<Company>) {
        self.companies = companies;
    }

    pub fn selected(&self) -> Option<&Company> {
        self.selected.as_ref()
    }

    pub fn select(&mut self, company: Company) {
        self.selected = Some(company);
    }

    pub fn is_selected(&self, company: &Company) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|selected| selected.ticker == company.ticker)
    }
}

/// Single-threaded shared handle. Borrows must never be held across an await.
pub type SharedState = Rc<RefCell<ClientState>>;

pub fn shared_state() -> SharedState {
    Rc::new(RefCell::new(ClientState::new()))
}

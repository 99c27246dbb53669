#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};

use futures::channel::oneshot;
use stock_dashboard_wasm::application::{CompanyListItem, DashboardView, StatsDisplay};
use stock_dashboard_wasm::domain::chart::{ChartBackend, LineChartOptions, LineSeries};
use stock_dashboard_wasm::domain::errors::{DashboardError, DashboardResult};
use stock_dashboard_wasm::domain::market_data::{
    Company, DisplayOptions, HistoryQuery, HistoryResponse, HistoryRow, MarketDataRepository, Prediction,
    Stats,
};

pub fn acme() -> Company {
    Company::new("Acme", "ACM")
}

pub fn beta() -> Company {
    Company::new("Beta", "BTA")
}

pub fn history(closes: &[f64], prediction: Option<f64>) -> HistoryResponse {
    let data: Vec<HistoryRow> = closes
        .iter()
        .enumerate()
        .map(|(i, close)| HistoryRow::new(format!("2024-01-{:02}", i + 1), *close))
        .collect();
    HistoryResponse {
        stats: Stats { last_close: closes.last().copied(), ..Stats::default() },
        prediction: prediction.map(Prediction::new),
        data,
        ..HistoryResponse::default()
    }
}

pub fn http_error(status: u16) -> DashboardError {
    DashboardError::Http { status, url: "/api/history".to_string() }
}

/// One scripted answer to `fetch_history`.
pub enum Scripted {
    Ready(DashboardResult<HistoryResponse>),
    /// Resolves when the test sends on the paired sender.
    Pending(oneshot::Receiver<DashboardResult<HistoryResponse>>),
}

/// Repository that replays scripted answers in call order and records queries.
pub struct ScriptedRepository {
    companies: DashboardResult<Vec<Company>>,
    history: RefCell<VecDeque<Scripted>>,
    pub queries: RefCell<Vec<HistoryQuery>>,
}

impl ScriptedRepository {
    pub fn new(companies: Vec<Company>) -> Self {
        Self::with_companies(Ok(companies))
    }

    pub fn with_companies(companies: DashboardResult<Vec<Company>>) -> Self {
        Self { companies, history: RefCell::new(VecDeque::new()), queries: RefCell::new(Vec::new()) }
    }

    pub fn then(self, answer: Scripted) -> Self {
        self.history.borrow_mut().push_back(answer);
        self
    }

    pub fn then_ok(self, response: HistoryResponse) -> Self {
        self.then(Scripted::Ready(Ok(response)))
    }

    pub fn then_err(self, error: DashboardError) -> Self {
        self.then(Scripted::Ready(Err(error)))
    }

    pub fn query_tickers(&self) -> Vec<String> {
        self.queries.borrow().iter().map(|q| q.ticker.clone()).collect()
    }
}

impl MarketDataRepository for ScriptedRepository {
    async fn fetch_companies(&self) -> DashboardResult<Vec<Company>> {
        self.companies.clone()
    }

    async fn fetch_history(&self, query: &HistoryQuery) -> DashboardResult<HistoryResponse> {
        self.queries.borrow_mut().push(query.clone());
        let next = self.history.borrow_mut().pop_front();
        match next {
            Some(Scripted::Ready(answer)) => answer,
            Some(Scripted::Pending(receiver)) => receiver
                .await
                .unwrap_or_else(|_| Err(DashboardError::Network("sender dropped".to_string()))),
            None => Err(DashboardError::Network(format!("no scripted answer for {}", query.ticker))),
        }
    }
}

/// View that records everything the controller pushes to it.
#[derive(Default)]
pub struct RecordingView {
    pub filter: RefCell<String>,
    pub options: RefCell<DisplayOptions>,
    pub label: RefCell<Option<String>>,
    pub list_renders: RefCell<Vec<Vec<CompanyListItem>>>,
    pub stats: RefCell<Option<StatsDisplay>>,
    pub alerts: RefCell<Vec<String>>,
}

impl RecordingView {
    pub fn last_list(&self) -> Vec<CompanyListItem> {
        self.list_renders.borrow().last().cloned().unwrap_or_default()
    }

    pub fn active_labels(&self) -> Vec<String> {
        self.last_list().into_iter().filter(|item| item.active).map(|item| item.label).collect()
    }
}

impl DashboardView for RecordingView {
    fn filter_text(&self) -> String {
        self.filter.borrow().clone()
    }

    fn display_options(&self) -> DisplayOptions {
        self.options.borrow().clone()
    }

    fn set_selected_label(&self, label: String) {
        *self.label.borrow_mut() = Some(label);
    }

    fn render_company_list(&self, items: Vec<CompanyListItem>) {
        self.list_renders.borrow_mut().push(items);
    }

    fn show_stats(&self, stats: StatsDisplay) {
        *self.stats.borrow_mut() = Some(stats);
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

/// Chart backend that only counts renders and destroys.
#[derive(Default)]
pub struct CountingChart {
    next: u32,
    pub rendered: Vec<LineSeries>,
    pub destroyed: usize,
    pub live: HashSet<u32>,
}

impl ChartBackend for CountingChart {
    type Handle = u32;

    fn render(&mut self, series: &LineSeries, _options: &LineChartOptions) -> DashboardResult<u32> {
        self.next += 1;
        let handle = self.next;
        self.rendered.push(series.clone());
        self.live.insert(handle);
        Ok(handle)
    }

    fn destroy(&mut self, handle: u32) {
        self.destroyed += 1;
        self.live.remove(&handle);
    }
}

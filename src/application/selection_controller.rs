use std::cell::{Cell, Ref, RefCell};

use futures::future::{AbortHandle, Abortable};

use crate::application::chart_view::ChartView;
use crate::application::company_store::CompanyStore;
use crate::application::stats_view::StatsView;
use crate::application::view::DashboardView;
use crate::domain::chart::{ChartBackend, LineChartOptions};
use crate::domain::errors::{DashboardError, DashboardResult};
use crate::domain::format::NumberFormat;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{Company, HistoryQuery, MarketDataRepository};
use crate::{log_debug, log_info, log_warn};

/// What happened to one `select_company` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Stats and chart now show this company.
    Applied { rows: usize },
    /// Backend answered non-2xx; the user was alerted and the panels kept
    /// their previous content.
    Rejected { status: u16 },
    /// A newer selection aborted this request before it could apply.
    Superseded,
}

struct InFlight {
    generation: u64,
    abort: AbortHandle,
}

/// Reacts to page events: load, company click, search input and option
/// changes. Only the most recent history request may update the panels.
pub struct SelectionController<R, V, B>
where
    R: MarketDataRepository,
    V: DashboardView,
    B: ChartBackend,
{
    store: CompanyStore<R>,
    view: V,
    stats: StatsView,
    chart: RefCell<ChartView<B>>,
    in_flight: RefCell<Option<InFlight>>,
    generation: Cell<u64>,
}

impl<R, V, B> SelectionController<R, V, B>
where
    R: MarketDataRepository,
    V: DashboardView,
    B: ChartBackend,
{
    pub fn new(repository: R, view: V, backend: B, format: NumberFormat) -> Self {
        Self::with_store(CompanyStore::new(repository), view, backend, format)
    }

    pub fn with_store(store: CompanyStore<R>, view: V, backend: B, format: NumberFormat) -> Self {
        Self {
            store,
            view,
            stats: StatsView::new(format),
            chart: RefCell::new(ChartView::new(backend, LineChartOptions::close_price(format))),
            in_flight: RefCell::new(None),
            generation: Cell::new(0),
        }
    }

    pub fn store(&self) -> &CompanyStore<R> {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn chart(&self) -> Ref<'_, ChartView<B>> {
        self.chart.borrow()
    }

    /// Page load: fetch companies, show them, then select the first one.
    /// Returns `None` when the backend lists no companies.
    pub async fn init(&self) -> DashboardResult<Option<SelectionOutcome>> {
        self.store.load().await?;
        self.refresh_list();

        let Some(first) = self.store.first() else {
            log_warn!(LogComponent::Application("Selection"), "Company list is empty");
            return Ok(None);
        };
        self.select_company(first).await.map(Some)
    }

    /// Search box input.
    pub fn filter_changed(&self, filter: &str) {
        self.view.render_company_list(self.store.list_items(filter));
    }

    /// Period or interval changed: reload the current company, if any.
    pub async fn options_changed(&self) -> DashboardResult<Option<SelectionOutcome>> {
        let Some(selected) = self.store.selected() else {
            return Ok(None);
        };
        self.select_company(selected).await.map(Some)
    }

    pub async fn select_company(&self, company: Company) -> DashboardResult<SelectionOutcome> {
        self.store.select(company.clone());
        self.view.set_selected_label(company.to_string());
        self.refresh_list();

        let query = HistoryQuery::for_company(&company, &self.view.display_options());
        log_info!(
            LogComponent::Application("Selection"),
            "Requesting {} history (period={}, interval={})",
            query.ticker,
            query.period,
            query.interval
        );

        let (generation, registration) = self.begin_request();
        let result = Abortable::new(self.store.repository().fetch_history(&query), registration).await;
        self.finish_request(generation);

        let response = match result {
            Err(_aborted) => {
                log_debug!(
                    LogComponent::Application("Selection"),
                    "Dropped superseded {} request",
                    company.ticker
                );
                return Ok(SelectionOutcome::Superseded);
            }
            Ok(Err(DashboardError::Http { status, url })) => {
                log_warn!(
                    LogComponent::Application("Selection"),
                    "History request {} failed with HTTP {}",
                    url,
                    status
                );
                self.view
                    .alert(&format!("Failed to fetch history for {}", company.ticker));
                return Ok(SelectionOutcome::Rejected { status });
            }
            Ok(Err(other)) => return Err(other),
            Ok(Ok(response)) => response,
        };

        self.view
            .show_stats(self.stats.update(&response.stats, response.prediction.as_ref()));
        self.chart.borrow_mut().draw(&response.data)?;

        Ok(SelectionOutcome::Applied { rows: response.data.len() })
    }

    fn refresh_list(&self) {
        let filter = self.view.filter_text();
        self.view.render_company_list(self.store.list_items(&filter));
    }

    /// Aborts whatever request is still running and registers a new one.
    fn begin_request(&self) -> (u64, futures::future::AbortRegistration) {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        let (abort, registration) = AbortHandle::new_pair();
        let previous = self.in_flight.replace(Some(InFlight { generation, abort }));
        if let Some(previous) = previous {
            previous.abort.abort();
        }
        (generation, registration)
    }

    fn finish_request(&self, generation: u64) {
        let mut in_flight = self.in_flight.borrow_mut();
        if in_flight.as_ref().is_some_and(|current| current.generation == generation) {
            *in_flight = None;
        }
    }
}

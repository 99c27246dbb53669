use crate::domain::chart::{ChartBackend, LineChartOptions, LineSeries};
use crate::domain::errors::DashboardResult;
use crate::domain::market_data::HistoryRow;

pub const CLOSE_SERIES_NAME: &str = "Close";

/// Owns the single live chart. Every draw releases the previous handle
/// before asking the backend for a new one.
pub struct ChartView<B: ChartBackend> {
    backend: B,
    options: LineChartOptions,
    handle: Option<B::Handle>,
}

impl<B: ChartBackend> ChartView<B> {
    pub fn new(backend: B, options: LineChartOptions) -> Self {
        Self { backend, options, handle: None }
    }

    pub fn draw(&mut self, rows: &[HistoryRow]) -> DashboardResult<()> {
        self.clear();
        let series = LineSeries::closes(CLOSE_SERIES_NAME, rows);
        self.handle = Some(self.backend.render(&series, &self.options)?);
        Ok(())
    }

    pub fn clear(&mut self) {
        if let Some(previous) = self.handle.take() {
            self.backend.destroy(previous);
        }
    }

    pub fn is_live(&self) -> bool {
        self.handle.is_some()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: ChartBackend> Drop for ChartView<B> {
    fn drop(&mut self) {
        self.clear();
    }
}

use crate::domain::chart::{LineChartOptions, LineSeries};
use crate::domain::errors::DashboardResult;

/// Charting capability. A handle stands for one live rendering and must be
/// handed back to `destroy` before the surface is reused.
pub trait ChartBackend {
    type Handle;

    fn render(&mut self, series: &LineSeries, options: &LineChartOptions) -> DashboardResult<Self::Handle>;

    fn destroy(&mut self, handle: Self::Handle);
}

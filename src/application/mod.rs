//! Orchestration between the page, the backend and the chart.

pub mod chart_view;
pub mod company_list;
pub mod company_store;
pub mod scroll_shadow;
pub mod selection_controller;
pub mod stats_view;
pub mod view;

pub use chart_view::ChartView;
pub use company_list::CompanyListItem;
pub use company_store::CompanyStore;
pub use scroll_shadow::ScrollShadow;
pub use selection_controller::{SelectionController, SelectionOutcome};
pub use stats_view::{StatField, StatsDisplay, StatsView};
pub use view::DashboardView;

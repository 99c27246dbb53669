use crate::application::company_list::CompanyListItem;
use crate::application::stats_view::StatsDisplay;
use crate::domain::market_data::DisplayOptions;

/// The page surface the controller drives. The Leptos front end implements it
/// with signals; tests implement it with recorders.
pub trait DashboardView {
    /// Current text of the search box.
    fn filter_text(&self) -> String;

    /// Current period/interval selector values.
    fn display_options(&self) -> DisplayOptions;

    fn set_selected_label(&self, label: String);

    /// Replaces the rendered list wholesale.
    fn render_company_list(&self, items: Vec<CompanyListItem>);

    fn show_stats(&self, stats: StatsDisplay);

    /// Blocking, user-visible failure message.
    fn alert(&self, message: &str);
}

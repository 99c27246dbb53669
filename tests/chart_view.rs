mod support;

use stock_dashboard_wasm::application::ChartView;
use stock_dashboard_wasm::application::chart_view::CLOSE_SERIES_NAME;
use stock_dashboard_wasm::domain::chart::{InteractionMode, LineChartOptions, LineSeries};
use stock_dashboard_wasm::domain::format::NumberFormat;
use stock_dashboard_wasm::domain::market_data::HistoryRow;
use support::CountingChart;

fn rows() -> Vec<HistoryRow> {
    vec![
        HistoryRow::new("2024-03-01", 180.5),
        HistoryRow::new("2024-03-04", 182.25),
        HistoryRow::new("2024-03-05", 179.0),
    ]
}

fn view() -> ChartView<CountingChart> {
    ChartView::new(CountingChart::default(), LineChartOptions::close_price(NumberFormat::default()))
}

#[test]
fn drawing_twice_releases_the_first_chart() {
    let mut chart = view();

    chart.draw(&rows()).unwrap();
    chart.draw(&rows()).unwrap();

    assert_eq!(chart.backend().destroyed, 1);
    assert_eq!(chart.backend().live.len(), 1);
    assert_eq!(chart.backend().rendered.len(), 2);
}

#[test]
fn series_is_dates_and_closes_in_order() {
    let mut chart = view();
    chart.draw(&rows()).unwrap();

    let series: &LineSeries = &chart.backend().rendered[0];
    assert_eq!(series.name, CLOSE_SERIES_NAME);
    assert_eq!(series.labels, vec!["2024-03-01", "2024-03-04", "2024-03-05"]);
    assert_eq!(series.values, vec![180.5, 182.25, 179.0]);
    assert_eq!(series.point(1), Some(("2024-03-04", 182.25)));
    assert_eq!(series.point(3), None);
}

#[test]
fn empty_history_still_renders_a_chart() {
    let mut chart = view();
    chart.draw(&[]).unwrap();

    assert!(chart.is_live());
    assert!(chart.backend().rendered[0].is_empty());
}

#[test]
fn clear_destroys_live_chart_once() {
    let mut chart = view();
    chart.draw(&rows()).unwrap();

    chart.clear();
    chart.clear();

    assert!(!chart.is_live());
    assert_eq!(chart.backend().destroyed, 1);
    assert!(chart.backend().live.is_empty());
}

#[test]
fn close_price_options_format_ticks_and_tooltips() {
    let options = LineChartOptions::close_price(NumberFormat::default());

    assert_eq!(options.tension, 0.1);
    assert_eq!(options.point_radius, 0.0);
    assert!(!options.fill);
    assert_eq!(options.interaction.mode, InteractionMode::Index);
    assert_eq!(options.interaction.mode.to_string(), "Index");
    assert!(!options.interaction.intersect);
    assert_eq!(options.y_tick_label(1250.0), "1,250");
    assert_eq!(options.tooltip_label(CLOSE_SERIES_NAME, 182.254), "Close: 182.25");
}

#![cfg(target_arch = "wasm32")]

use stock_dashboard_wasm::domain::chart::{ChartBackend, LineChartOptions, LineSeries};
use stock_dashboard_wasm::domain::format::NumberFormat;
use stock_dashboard_wasm::domain::market_data::HistoryRow;
use stock_dashboard_wasm::infrastructure::rendering::CanvasLineChart;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn mount_canvas(id: &str) -> web_sys::HtmlCanvasElement {
    let document = gloo::utils::document();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    canvas.set_width(640);
    canvas.set_height(320);
    gloo::utils::body().append_child(&canvas).unwrap();
    canvas
}

fn series() -> LineSeries {
    let rows = [
        HistoryRow::new("2024-01-02", 185.64),
        HistoryRow::new("2024-01-03", 184.25),
        HistoryRow::new("2024-01-04", 181.91),
    ];
    LineSeries::closes("Close", &rows)
}

#[wasm_bindgen_test]
fn renders_and_destroys_on_a_real_canvas() {
    let canvas = mount_canvas("chart-under-test");
    let mut backend = CanvasLineChart::new("chart-under-test");
    let options = LineChartOptions::close_price(NumberFormat::default());

    let first = backend.render(&series(), &options).unwrap();
    let second = backend.render(&series(), &options).unwrap();
    assert_ne!(first, second);
    assert_eq!(backend.live_count(), 2);

    backend.destroy(first);
    backend.destroy(second);
    assert_eq!(backend.live_count(), 0);
    canvas.remove();
}

#[wasm_bindgen_test]
fn missing_canvas_is_a_rendering_error() {
    let mut backend = CanvasLineChart::new("no-such-canvas");
    let options = LineChartOptions::close_price(NumberFormat::default());
    assert!(backend.render(&series(), &options).is_err());
}

#[wasm_bindgen_test]
fn bitmap_follows_the_css_size() {
    let canvas = mount_canvas("chart-stretched");
    canvas.style().set_property("width", "1280px").unwrap();
    canvas.style().set_property("height", "640px").unwrap();
    let mut backend = CanvasLineChart::new("chart-stretched");
    let options = LineChartOptions::close_price(NumberFormat::default());

    let handle = backend.render(&series(), &options).unwrap();

    let ratio = gloo::utils::window().device_pixel_ratio().max(1.0);
    assert_eq!(canvas.width(), (1280.0 * ratio).round() as u32);
    assert_eq!(canvas.height(), (640.0 * ratio).round() as u32);
    backend.destroy(handle);
    canvas.remove();
}

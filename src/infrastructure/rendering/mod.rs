pub mod canvas_chart;
pub mod geometry;

pub use canvas_chart::{CanvasChartHandle, CanvasLineChart};

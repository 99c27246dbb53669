use derive_more::Display;

use crate::domain::format::NumberFormat;

/// Value Object - how hovering picks the points to report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InteractionMode {
    /// Every dataset at the hovered x index
    #[display(fmt = "Index")]
    Index,
    /// Closest point in both axes
    #[display(fmt = "Nearest")]
    Nearest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interaction {
    pub mode: InteractionMode,
    /// When false the pointer does not need to touch a point to trigger hover.
    pub intersect: bool,
}

/// Value Object - look and behavior of a line chart
#[derive(Debug, Clone, PartialEq)]
pub struct LineChartOptions {
    pub border_width: f64,
    pub point_radius: f64,
    pub fill: bool,
    /// Bezier smoothing, 0 draws straight segments
    pub tension: f64,
    pub show_legend: bool,
    pub interaction: Interaction,
    pub number_format: NumberFormat,
}

impl LineChartOptions {
    /// Close-price line: no markers, no fill, slight smoothing, shared-index hover.
    pub fn close_price(number_format: NumberFormat) -> Self {
        Self {
            border_width: 2.0,
            point_radius: 0.0,
            fill: false,
            tension: 0.1,
            show_legend: true,
            interaction: Interaction { mode: InteractionMode::Index, intersect: false },
            number_format,
        }
    }

    pub fn y_tick_label(&self, value: f64) -> String {
        self.number_format.price(Some(value))
    }

    pub fn tooltip_label(&self, series_name: &str, value: f64) -> String {
        format!("{}: {}", series_name, self.number_format.price(Some(value)))
    }
}

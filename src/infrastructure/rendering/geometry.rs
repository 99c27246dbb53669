//! Pure layout math for the canvas line chart: plot area, y-axis ticks,
//! x positions, hover hit-testing and bezier smoothing.

use crate::domain::chart::{Interaction, InteractionMode};

/// Space reserved around the plot for axis labels and the legend
pub const PADDING_LEFT: f64 = 72.0;
pub const PADDING_RIGHT: f64 = 16.0;
pub const PADDING_TOP: f64 = 36.0;
pub const PADDING_BOTTOM: f64 = 32.0;

/// Upper bound on y-axis tick count
pub const MAX_Y_TICKS: usize = 6;
/// Upper bound on x-axis labels
pub const MAX_X_LABELS: usize = 8;
/// Pointer distance that counts as touching a point
pub const HIT_RADIUS: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

/// Bezier handles entering (`previous`) and leaving (`next`) a point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoints {
    pub previous: Point,
    pub next: Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn for_canvas(width: f64, height: f64) -> Self {
        Self {
            left: PADDING_LEFT,
            top: PADDING_TOP,
            width: (width - PADDING_LEFT - PADDING_RIGHT).max(1.0),
            height: (height - PADDING_TOP - PADDING_BOTTOM).max(1.0),
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Everything needed to map series indexes and values to canvas pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotLayout {
    pub area: PlotArea,
    pub min: f64,
    pub max: f64,
    pub ticks: Vec<f64>,
    pub len: usize,
}

impl PlotLayout {
    pub fn new(canvas_width: f64, canvas_height: f64, values: &[f64]) -> Self {
        let (low, high) = value_range(values).unwrap_or((0.0, 1.0));
        let (min, max, ticks) = nice_ticks(low, high, MAX_Y_TICKS);
        Self {
            area: PlotArea::for_canvas(canvas_width, canvas_height),
            min,
            max,
            ticks,
            len: values.len(),
        }
    }

    /// First point on the left edge, last on the right edge.
    pub fn x_for_index(&self, index: usize) -> f64 {
        if self.len <= 1 {
            return self.area.left + self.area.width / 2.0;
        }
        self.area.left + self.area.width * index as f64 / (self.len - 1) as f64
    }

    pub fn y_for_value(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return self.area.top + self.area.height / 2.0;
        }
        self.area.bottom() - (value - self.min) / span * self.area.height
    }

    /// Index whose x position is closest to `x`, clamped to the series.
    /// Hovering anywhere over the chart selects a point.
    pub fn nearest_index(&self, x: f64) -> Option<usize> {
        match self.len {
            0 => None,
            1 => Some(0),
            len => {
                let ratio = ((x - self.area.left) / self.area.width).clamp(0.0, 1.0);
                Some((ratio * (len - 1) as f64).round() as usize)
            }
        }
    }

    /// Point reported for a pointer position under the given interaction.
    /// `Index` picks by x alone, `Nearest` by distance; with `intersect` the
    /// pointer must also be within `HIT_RADIUS` of the point.
    pub fn hovered_index(&self, pointer: Point, points: &[Point], interaction: Interaction) -> Option<usize> {
        let index = match interaction.mode {
            InteractionMode::Index => self.nearest_index(pointer.x)?,
            InteractionMode::Nearest => points
                .iter()
                .enumerate()
                .filter(|(_, p)| p.y.is_finite())
                .min_by(|(_, a), (_, b)| a.distance(&pointer).total_cmp(&b.distance(&pointer)))
                .map(|(i, _)| i)?,
        };
        if interaction.intersect {
            let point = points.get(index)?;
            if point.distance(&pointer) > HIT_RADIUS {
                return None;
            }
        }
        Some(index)
    }

    pub fn points(&self, values: &[f64]) -> Vec<Point> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Point::new(self.x_for_index(i), self.y_for_value(*v)))
            .collect()
    }
}

/// Maps a pointer offset in CSS pixels onto a layout built for
/// `layout_width` x `layout_height`. Unmeasured elements pass the offset through.
pub fn scale_to_layout(
    offset: Point,
    client_width: f64,
    client_height: f64,
    layout_width: f64,
    layout_height: f64,
) -> Point {
    if client_width <= 0.0 || client_height <= 0.0 {
        return offset;
    }
    Point::new(offset.x * layout_width / client_width, offset.y * layout_height / client_height)
}

/// Min and max over finite values. A flat series is widened so it still has height.
pub fn value_range(values: &[f64]) -> Option<(f64, f64)> {
    let (min, max) = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if min > max {
        return None;
    }
    if min == max {
        let pad = if min == 0.0 { 1.0 } else { min.abs() * 0.05 };
        return Some((min - pad, max + pad));
    }
    Some((min, max))
}

/// Round tick step (1, 2, 2.5 or 5 times a power of ten) covering `[min, max]`
/// with at most `max_ticks` intervals. Returns the widened bounds and the ticks.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> (f64, f64, Vec<f64>) {
    let intervals = max_ticks.max(2) as f64 - 1.0;
    let step = nice_step((max - min) / intervals);
    let nice_min = (min / step).floor() * step;
    let nice_max = (max / step).ceil() * step;

    let count = ((nice_max - nice_min) / step).round() as usize;
    let ticks = (0..=count).map(|i| nice_min + step * i as f64).collect();
    (nice_min, nice_max, ticks)
}

fn nice_step(rough: f64) -> f64 {
    if rough.is_nan() || rough <= 0.0 || rough.is_infinite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(rough.log10().floor());
    let normalized = rough / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 2.5 {
        2.5
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Indexes that get an x-axis label, evenly spaced, first one always included.
pub fn label_indices(len: usize, max_labels: usize) -> Vec<usize> {
    if len == 0 || max_labels == 0 {
        return Vec::new();
    }
    let step = len.div_ceil(max_labels).max(1);
    (0..len).step_by(step).collect()
}

/// Catmull-Rom style handles: each handle is pushed
/// along the neighbor-to-neighbor direction, scaled by `tension` and by the
/// relative length of the adjacent segment. `tension == 0` keeps handles on
/// the point itself.
pub fn spline_control_points(points: &[Point], tension: f64) -> Vec<ControlPoints> {
    points
        .iter()
        .enumerate()
        .map(|(i, current)| {
            let previous = neighbor(points, i.checked_sub(1)).unwrap_or(*current);
            let next = neighbor(points, Some(i + 1)).unwrap_or(*current);

            let d01 = previous.distance(current);
            let d12 = current.distance(&next);
            let total = d01 + d12;
            let (s01, s12) = if total > 0.0 { (d01 / total, d12 / total) } else { (0.0, 0.0) };

            let fa = tension * s01;
            let fb = tension * s12;
            let dx = next.x - previous.x;
            let dy = next.y - previous.y;
            ControlPoints {
                previous: Point::new(current.x - fa * dx, current.y - fa * dy),
                next: Point::new(current.x + fb * dx, current.y + fb * dy),
            }
        })
        .collect()
}

fn neighbor(points: &[Point], index: Option<usize>) -> Option<Point> {
    index
        .and_then(|i| points.get(i))
        .filter(|p| p.x.is_finite() && p.y.is_finite())
        .copied()
}

/// Top-left corner for a `width` x `height` tooltip next to `anchor`, kept
/// inside the canvas. Flips to the left of the anchor near the right edge.
pub fn tooltip_origin(anchor: Point, width: f64, height: f64, canvas_width: f64, canvas_height: f64) -> Point {
    const OFFSET: f64 = 12.0;
    let mut x = anchor.x + OFFSET;
    if x + width > canvas_width {
        x = anchor.x - OFFSET - width;
    }
    let y = (anchor.y - height / 2.0).clamp(0.0, (canvas_height - height).max(0.0));
    Point::new(x.max(0.0), y)
}

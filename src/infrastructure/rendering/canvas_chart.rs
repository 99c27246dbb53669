use std::cell::RefCell;
use std::collections::HashMap;
use std::f64::consts::TAU;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::geometry::{
    MAX_X_LABELS, PlotLayout, Point, label_indices, scale_to_layout, spline_control_points, tooltip_origin,
};
use crate::domain::{
    chart::{ChartBackend, LineChartOptions, LineSeries},
    errors::{DashboardError, DashboardResult},
    logging::LogComponent,
};
use crate::{log_debug, log_warn};

const LINE_COLOR: &str = "rgb(54, 162, 235)";
const FILL_COLOR: &str = "rgba(54, 162, 235, 0.15)";
const GRID_COLOR: &str = "rgba(0, 0, 0, 0.08)";
const AXIS_TEXT_COLOR: &str = "#666666";
const CROSSHAIR_COLOR: &str = "rgba(0, 0, 0, 0.25)";
const TOOLTIP_BACKGROUND: &str = "rgba(0, 0, 0, 0.8)";
const TOOLTIP_TEXT_COLOR: &str = "#ffffff";
const FONT: &str = "12px sans-serif";
const TITLE_FONT: &str = "bold 12px sans-serif";

const TOOLTIP_PADDING: f64 = 6.0;
const TOOLTIP_LINE_HEIGHT: f64 = 16.0;
const HOVER_DOT_RADIUS: f64 = 4.0;
const LEGEND_SWATCH_WIDTH: f64 = 28.0;
const LEGEND_SWATCH_HEIGHT: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanvasChartHandle(u32);

/// Line charts drawn with Canvas 2D onto the `<canvas>` with the given id.
/// Each live chart keeps its own hover and resize listeners until destroyed.
pub struct CanvasLineChart {
    canvas_id: String,
    next_id: u32,
    live: HashMap<CanvasChartHandle, LiveChart>,
}

struct LiveChart {
    scene: Rc<ChartScene>,
    _listeners: Vec<EventListener>,
}

impl CanvasLineChart {
    pub fn new(canvas_id: impl Into<String>) -> Self {
        Self { canvas_id: canvas_id.into(), next_id: 0, live: HashMap::new() }
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    fn canvas(&self) -> DashboardResult<HtmlCanvasElement> {
        gloo::utils::document()
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| DashboardError::Rendering(format!("canvas #{} not found", self.canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| DashboardError::Rendering(format!("#{} is not a canvas", self.canvas_id)))
    }
}

impl ChartBackend for CanvasLineChart {
    type Handle = CanvasChartHandle;

    fn render(&mut self, series: &LineSeries, options: &LineChartOptions) -> DashboardResult<CanvasChartHandle> {
        let canvas = self.canvas()?;
        let context = context_2d(&canvas)?;
        let scene = Rc::new(ChartScene {
            canvas: canvas.clone(),
            context,
            series: series.clone(),
            options: options.clone(),
            frame: RefCell::new(Frame::default()),
        });
        scene.fit()?;
        scene.draw(None)?;

        let hover_scene = scene.clone();
        let on_move = EventListener::new(&canvas, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let hovered = hover_scene.hovered_at(event.offset_x() as f64, event.offset_y() as f64);
            hover_scene.redraw(hovered);
        });
        let leave_scene = scene.clone();
        let on_leave = EventListener::new(&canvas, "mouseleave", move |_| leave_scene.redraw(None));
        let resize_scene = scene.clone();
        let on_resize = EventListener::new(&gloo::utils::window(), "resize", move |_| {
            match resize_scene.fit() {
                Ok(()) => resize_scene.redraw(None),
                Err(err) => {
                    log_warn!(LogComponent::Infrastructure("CanvasLineChart"), "Resize failed: {}", err);
                }
            }
        });

        self.next_id += 1;
        let handle = CanvasChartHandle(self.next_id);
        self.live.insert(handle, LiveChart { scene, _listeners: vec![on_move, on_leave, on_resize] });

        log_debug!(
            LogComponent::Infrastructure("CanvasLineChart"),
            "Rendered {} points as chart #{} ({} hover)",
            series.len(),
            handle.0,
            options.interaction.mode
        );
        Ok(handle)
    }

    /// Removes the hover and resize listeners and wipes the canvas.
    fn destroy(&mut self, handle: CanvasChartHandle) {
        if let Some(chart) = self.live.remove(&handle) {
            chart.scene.clear();
        }
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> DashboardResult<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(js_error("Failed to get 2D context"))?
        .ok_or_else(|| DashboardError::Rendering("2D context unavailable".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| DashboardError::Rendering("Failed to cast to 2D context".to_string()))
}

fn js_error(what: &'static str) -> impl Fn(JsValue) -> DashboardError {
    move |err| DashboardError::Rendering(format!("{}: {:?}", what, err))
}

/// Layout for the canvas's current CSS size.
#[derive(Default)]
struct Frame {
    width: f64,
    height: f64,
    layout: Option<PlotLayout>,
    points: Vec<Point>,
}

/// One rendered chart: the data plus the pixel layout it was last fitted to.
struct ChartScene {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    series: LineSeries,
    options: LineChartOptions,
    frame: RefCell<Frame>,
}

impl ChartScene {
    /// Sizes the bitmap to the element's CSS box times the device pixel
    /// ratio and rebuilds the layout in CSS pixels. An element that is not
    /// laid out keeps its bitmap size.
    fn fit(&self) -> DashboardResult<()> {
        let (client_width, client_height) = (self.canvas.client_width(), self.canvas.client_height());
        let (width, height, ratio) = if client_width > 0 && client_height > 0 {
            let ratio = gloo::utils::window().device_pixel_ratio().max(1.0);
            let bitmap_width = (client_width as f64 * ratio).round() as u32;
            let bitmap_height = (client_height as f64 * ratio).round() as u32;
            if bitmap_width != self.canvas.width() {
                self.canvas.set_width(bitmap_width);
            }
            if bitmap_height != self.canvas.height() {
                self.canvas.set_height(bitmap_height);
            }
            (client_width as f64, client_height as f64, ratio)
        } else {
            (self.canvas.width() as f64, self.canvas.height() as f64, 1.0)
        };
        // resizing the bitmap resets the transform
        self.context
            .set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0)
            .map_err(js_error("Failed to scale context"))?;

        let layout = PlotLayout::new(width, height, &self.series.values);
        let points = layout.points(&self.series.values);
        *self.frame.borrow_mut() = Frame { width, height, layout: Some(layout), points };
        Ok(())
    }

    /// Series index under a pointer given in the element's CSS pixels.
    fn hovered_at(&self, offset_x: f64, offset_y: f64) -> Option<usize> {
        let frame = self.frame.borrow();
        let layout = frame.layout.as_ref()?;
        let pointer = scale_to_layout(
            Point::new(offset_x, offset_y),
            self.canvas.client_width() as f64,
            self.canvas.client_height() as f64,
            frame.width,
            frame.height,
        );
        layout.hovered_index(pointer, &frame.points, self.options.interaction)
    }

    fn clear(&self) {
        let frame = self.frame.borrow();
        self.context.clear_rect(0.0, 0.0, frame.width, frame.height);
    }

    fn redraw(&self, hovered: Option<usize>) {
        if let Err(err) = self.draw(hovered) {
            log_warn!(LogComponent::Infrastructure("CanvasLineChart"), "Redraw failed: {}", err);
        }
    }

    fn draw(&self, hovered: Option<usize>) -> DashboardResult<()> {
        self.clear();
        let frame = self.frame.borrow();
        let Some(layout) = frame.layout.as_ref() else {
            return Ok(());
        };
        self.context.set_font(FONT);
        self.draw_y_axis(layout)?;
        self.draw_x_labels(layout)?;
        if self.options.show_legend {
            self.draw_legend(layout)?;
        }
        self.draw_line(layout, &frame.points)?;
        if let Some(index) = hovered {
            self.draw_hover(layout, &frame, index)?;
        }
        Ok(())
    }

    fn draw_y_axis(&self, layout: &PlotLayout) -> DashboardResult<()> {
        let ctx = &self.context;
        let area = layout.area;
        ctx.set_line_width(1.0);
        ctx.set_stroke_style_str(GRID_COLOR);
        ctx.set_fill_style_str(AXIS_TEXT_COLOR);
        ctx.set_text_align("right");
        ctx.set_text_baseline("middle");

        for tick in &layout.ticks {
            let y = layout.y_for_value(*tick);
            ctx.begin_path();
            ctx.move_to(area.left, y);
            ctx.line_to(area.right(), y);
            ctx.stroke();
            ctx.fill_text(&self.options.y_tick_label(*tick), area.left - 8.0, y)
                .map_err(js_error("Failed to draw y tick"))?;
        }
        Ok(())
    }

    fn draw_x_labels(&self, layout: &PlotLayout) -> DashboardResult<()> {
        let ctx = &self.context;
        ctx.set_fill_style_str(AXIS_TEXT_COLOR);
        ctx.set_text_align("center");
        ctx.set_text_baseline("top");

        for index in label_indices(self.series.len(), MAX_X_LABELS) {
            if let Some((label, _)) = self.series.point(index) {
                ctx.fill_text(label, layout.x_for_index(index), layout.area.bottom() + 8.0)
                    .map_err(js_error("Failed to draw x label"))?;
            }
        }
        Ok(())
    }

    fn draw_legend(&self, layout: &PlotLayout) -> DashboardResult<()> {
        let ctx = &self.context;
        let text_width = ctx
            .measure_text(&self.series.name)
            .map_err(js_error("Failed to measure legend"))?
            .width();
        let total = LEGEND_SWATCH_WIDTH + 6.0 + text_width;
        let x = layout.area.left + (layout.area.width - total) / 2.0;
        let y = 12.0;

        ctx.set_fill_style_str(FILL_COLOR);
        ctx.fill_rect(x, y, LEGEND_SWATCH_WIDTH, LEGEND_SWATCH_HEIGHT);
        ctx.set_stroke_style_str(LINE_COLOR);
        ctx.set_line_width(self.options.border_width);
        ctx.stroke_rect(x, y, LEGEND_SWATCH_WIDTH, LEGEND_SWATCH_HEIGHT);

        ctx.set_fill_style_str(AXIS_TEXT_COLOR);
        ctx.set_text_align("left");
        ctx.set_text_baseline("middle");
        ctx.fill_text(&self.series.name, x + LEGEND_SWATCH_WIDTH + 6.0, y + LEGEND_SWATCH_HEIGHT / 2.0)
            .map_err(js_error("Failed to draw legend"))
    }

    /// Non-finite values leave a gap in the line.
    fn draw_line(&self, layout: &PlotLayout, points: &[Point]) -> DashboardResult<()> {
        let ctx = &self.context;
        let controls = spline_control_points(points, self.options.tension);

        ctx.begin_path();
        ctx.set_line_width(self.options.border_width);
        ctx.set_stroke_style_str(LINE_COLOR);

        let mut pen_down = false;
        let mut first_x = None;
        let mut last_x = None;
        for (i, point) in points.iter().enumerate() {
            if !point.y.is_finite() {
                pen_down = false;
                continue;
            }
            if !pen_down {
                ctx.move_to(point.x, point.y);
                pen_down = true;
            } else if self.options.tension == 0.0 {
                ctx.line_to(point.x, point.y);
            } else {
                let leaving = controls[i - 1].next;
                let entering = controls[i].previous;
                ctx.bezier_curve_to(leaving.x, leaving.y, entering.x, entering.y, point.x, point.y);
            }
            first_x.get_or_insert(point.x);
            last_x = Some(point.x);
        }
        ctx.stroke();

        if let (true, Some(first), Some(last)) = (self.options.fill, first_x, last_x) {
            let bottom = layout.area.bottom();
            ctx.line_to(last, bottom);
            ctx.line_to(first, bottom);
            ctx.close_path();
            ctx.set_fill_style_str(FILL_COLOR);
            ctx.fill();
        }

        if self.options.point_radius > 0.0 {
            ctx.set_fill_style_str(LINE_COLOR);
            for point in points.iter().filter(|p| p.y.is_finite()) {
                ctx.begin_path();
                ctx.arc(point.x, point.y, self.options.point_radius, 0.0, TAU)
                    .map_err(js_error("Failed to draw point"))?;
                ctx.fill();
            }
        }
        Ok(())
    }

    /// Crosshair at the hovered index plus a tooltip with date and value.
    fn draw_hover(&self, layout: &PlotLayout, frame: &Frame, index: usize) -> DashboardResult<()> {
        let Some((label, value)) = self.series.point(index) else {
            return Ok(());
        };
        let ctx = &self.context;
        let area = layout.area;
        let x = layout.x_for_index(index);

        ctx.set_line_width(1.0);
        ctx.set_stroke_style_str(CROSSHAIR_COLOR);
        ctx.begin_path();
        ctx.move_to(x, area.top);
        ctx.line_to(x, area.bottom());
        ctx.stroke();

        if !value.is_finite() {
            return Ok(());
        }
        let y = layout.y_for_value(value);
        ctx.set_fill_style_str(LINE_COLOR);
        ctx.begin_path();
        ctx.arc(x, y, HOVER_DOT_RADIUS, 0.0, TAU)
            .map_err(js_error("Failed to draw hover point"))?;
        ctx.fill();

        let body = self.options.tooltip_label(&self.series.name, value);
        ctx.set_font(TITLE_FONT);
        let title_width = ctx.measure_text(label).map_err(js_error("Failed to measure tooltip"))?.width();
        ctx.set_font(FONT);
        let body_width = ctx.measure_text(&body).map_err(js_error("Failed to measure tooltip"))?.width();

        let width = title_width.max(body_width) + TOOLTIP_PADDING * 2.0;
        let height = TOOLTIP_LINE_HEIGHT * 2.0 + TOOLTIP_PADDING * 2.0;
        let origin = tooltip_origin(Point::new(x, y), width, height, frame.width, frame.height);

        ctx.set_fill_style_str(TOOLTIP_BACKGROUND);
        ctx.fill_rect(origin.x, origin.y, width, height);

        ctx.set_fill_style_str(TOOLTIP_TEXT_COLOR);
        ctx.set_text_align("left");
        ctx.set_text_baseline("top");
        ctx.set_font(TITLE_FONT);
        ctx.fill_text(label, origin.x + TOOLTIP_PADDING, origin.y + TOOLTIP_PADDING)
            .map_err(js_error("Failed to draw tooltip"))?;
        ctx.set_font(FONT);
        ctx.fill_text(&body, origin.x + TOOLTIP_PADDING, origin.y + TOOLTIP_PADDING + TOOLTIP_LINE_HEIGHT)
            .map_err(js_error("Failed to draw tooltip"))
    }
}

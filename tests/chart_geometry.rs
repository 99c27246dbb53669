use quickcheck_macros::quickcheck;
use stock_dashboard_wasm::domain::chart::{Interaction, InteractionMode};
use stock_dashboard_wasm::infrastructure::rendering::geometry::{
    HIT_RADIUS, MAX_Y_TICKS, PlotLayout, Point, label_indices, nice_ticks, scale_to_layout,
    spline_control_points, tooltip_origin, value_range,
};

const INDEX_HOVER: Interaction = Interaction { mode: InteractionMode::Index, intersect: false };

#[quickcheck]
fn ticks_cover_the_value_range(low_cents: i32, span_cents: u16) -> bool {
    let min = low_cents as f64 / 100.0;
    let max = min + (span_cents as f64 + 1.0) / 100.0;
    let (nice_min, nice_max, ticks) = nice_ticks(min, max, MAX_Y_TICKS);

    let eps = 1e-9 * max.abs().max(1.0);
    nice_min <= min + eps
        && nice_max >= max - eps
        && ticks.len() >= 2
        && ticks.len() <= MAX_Y_TICKS + 2
        && ticks.windows(2).all(|pair| pair[0] < pair[1])
}

#[test]
fn ticks_use_round_steps() {
    let (min, max, ticks) = nice_ticks(101.3, 148.9, MAX_Y_TICKS);
    assert_eq!((min, max), (100.0, 150.0));
    assert_eq!(ticks, vec![100.0, 110.0, 120.0, 130.0, 140.0, 150.0]);
}

#[test]
fn value_range_skips_non_finite() {
    assert_eq!(value_range(&[3.0, f64::NAN, 1.0, f64::INFINITY]), Some((1.0, 3.0)));
    assert_eq!(value_range(&[]), None);
}

#[test]
fn first_and_last_points_touch_plot_edges() {
    let layout = PlotLayout::new(800.0, 400.0, &[1.0, 2.0, 3.0]);
    assert_eq!(layout.x_for_index(0), layout.area.left);
    assert_eq!(layout.x_for_index(2), layout.area.right());
    assert!(layout.y_for_value(layout.max) <= layout.y_for_value(layout.min));
}

#[test]
fn zero_tension_keeps_handles_on_the_point() {
    let points = [Point::new(0.0, 0.0), Point::new(10.0, 5.0), Point::new(20.0, -3.0)];
    for (point, handles) in points.iter().zip(spline_control_points(&points, 0.0)) {
        assert_eq!(handles.previous, *point);
        assert_eq!(handles.next, *point);
    }
}

#[test]
fn collinear_handles_stay_on_the_line() {
    let points = [Point::new(0.0, 0.0), Point::new(10.0, 10.0), Point::new(20.0, 20.0)];
    let middle = spline_control_points(&points, 0.4)[1];
    assert!((middle.previous.x - middle.previous.y).abs() < 1e-9);
    assert!((middle.next.x - middle.next.y).abs() < 1e-9);
    assert!(middle.previous.x < 10.0 && middle.next.x > 10.0);
}

#[test]
fn index_hover_snaps_to_nearest_x() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    let layout = PlotLayout::new(800.0, 400.0, &values);
    let points = layout.points(&values);

    let between = Point::new(layout.x_for_index(1) + 1.0, 0.0);
    assert_eq!(layout.hovered_index(between, &points, INDEX_HOVER), Some(1));
    let far_right = Point::new(10_000.0, 0.0);
    assert_eq!(layout.hovered_index(far_right, &points, INDEX_HOVER), Some(4));
}

#[test]
fn intersect_requires_touching_the_point() {
    let values = [10.0, 20.0];
    let layout = PlotLayout::new(800.0, 400.0, &values);
    let points = layout.points(&values);
    let interaction = Interaction { mode: InteractionMode::Nearest, intersect: true };

    let on_point = Point::new(points[1].x, points[1].y + HIT_RADIUS / 2.0);
    assert_eq!(layout.hovered_index(on_point, &points, interaction), Some(1));
    let away = Point::new(points[1].x, points[1].y + HIT_RADIUS * 4.0);
    assert_eq!(layout.hovered_index(away, &points, interaction), None);
}

#[test]
fn pointer_on_a_stretched_canvas_maps_back_to_the_layout() {
    let values: Vec<f64> = (0..=100).map(f64::from).collect();
    let layout = PlotLayout::new(640.0, 320.0, &values);
    let points = layout.points(&values);

    // Element shown at twice the size the layout was built for.
    let offset = Point::new(layout.x_for_index(50) * 2.0, 300.0);
    let pointer = scale_to_layout(offset, 1280.0, 640.0, 640.0, 320.0);

    assert!((pointer.x - layout.x_for_index(50)).abs() < 1e-9);
    assert!((pointer.y - 150.0).abs() < 1e-9);
    assert_eq!(layout.hovered_index(pointer, &points, INDEX_HOVER), Some(50));
}

#[test]
fn unmeasured_element_passes_the_offset_through() {
    let offset = Point::new(120.0, 40.0);
    assert_eq!(scale_to_layout(offset, 0.0, 0.0, 640.0, 320.0), offset);
}

#[test]
fn empty_series_has_nothing_to_hover() {
    let layout = PlotLayout::new(800.0, 400.0, &[]);
    assert_eq!(layout.hovered_index(Point::new(100.0, 100.0), &[], INDEX_HOVER), None);
}

#[test]
fn x_labels_are_thinned_evenly() {
    assert_eq!(label_indices(5, 8), vec![0, 1, 2, 3, 4]);
    assert_eq!(label_indices(20, 8), vec![0, 3, 6, 9, 12, 15, 18]);
    assert!(label_indices(0, 8).is_empty());
}

#[test]
fn tooltip_flips_near_right_edge_and_stays_inside() {
    let right = tooltip_origin(Point::new(790.0, 10.0), 120.0, 40.0, 800.0, 400.0);
    assert!(right.x + 120.0 <= 790.0);
    assert_eq!(right.y, 0.0);

    let left = tooltip_origin(Point::new(100.0, 200.0), 120.0, 40.0, 800.0, 400.0);
    assert_eq!(left, Point::new(112.0, 180.0));
}

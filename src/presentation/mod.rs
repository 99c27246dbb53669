//! Leptos front end: the page layout and the signal-backed view the
//! selection controller drives.

pub mod app;

pub use app::{App, CHART_CANVAS_ID, LeptosDashboardView, mount};

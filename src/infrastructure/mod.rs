//! Browser-facing adapters: backend HTTP, page config, console logging and
//! the canvas chart.

pub mod config;
pub mod http;
pub mod rendering;
pub mod services;

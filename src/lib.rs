use wasm_bindgen::prelude::*;

use crate::domain::logging::LogComponent;
use crate::infrastructure::config::DashboardConfig;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

/// Entry point: wire logging, read the page config and mount the dashboard.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match DashboardConfig::load_from_document() {
        Ok(config) => (config, None),
        Err(err) => (DashboardConfig::default(), Some(err)),
    };

    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new(config.min_log_level()));
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    if let Some(err) = config_error {
        log_warn!(LogComponent::Presentation("Initialize"), "{}; using defaults", err);
    }
    log_info!(
        LogComponent::Presentation("Initialize"),
        "🚀 Stock dashboard starting (api base: {:?}, locale: {})",
        config.api_base,
        config.locale
    );

    presentation::mount(config);
}

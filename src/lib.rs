use wasm_bindgen::prelude::*;

pub mod app;
pub mod application;
pub mod domain;
pub mod global_state;
pub mod infrastructure;

use crate::app::{App, LeptosLogger};
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::services::{BrowserTimeProvider, ConsoleLogger};

/// Initialize the dashboard: logging, panic hook, component tree
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    // Initialize time provider with browser implementation
    let browser_time_provider = Box::new(BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    // Console output plus the on-page debug console
    let logger = Box::new(LeptosLogger::new(ConsoleLogger::new_development()));
    domain::logging::init_logger(logger);

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        "🚀 Orders dashboard starting",
    );

    leptos::mount_to_body(App);
}

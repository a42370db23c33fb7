use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::domain::logging::{LogComponent, get_logger};
use leptos::view;

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod time_utils;

/// Wire up logging and mount the root component.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = if cfg!(debug_assertions) {
        Box::new(infrastructure::services::ConsoleLogger::new_development())
    } else {
        Box::new(infrastructure::services::ConsoleLogger::new_production())
    };
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        "🚀 Stock chart app starting",
    );

    leptos::mount_to_body(|| view! { <App/> });
}

//! Inventory Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod directory;
mod draft;
mod logging;
mod models;
mod new_item;
mod picker;
mod routes;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    logging::init(config.log_level);
    log::info!(target: "APP", "Starting against {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}

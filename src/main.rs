//! Electronics Recommender Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = config::api_config();
    if let Some(level) = config.logger_level() {
        wasm_logger::init(wasm_logger::Config::new(level));
    }
    log::info!("[Main] Recommender UI starting, API at {}", config.base_url());

    mount_to_body(App);
}

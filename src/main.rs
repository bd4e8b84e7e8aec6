//! ADO Card Game Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod logging;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, warnings) = AppConfig::from_location();
    logging::init(config.log_level);
    for warning in warnings {
        log::warn!("[CONFIG] {}", warning);
    }

    mount_to_body(move || view! { <App config=config /> });
}

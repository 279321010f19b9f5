//! Frontend Entry Point

use leptos::prelude::*;
use todo_query_ui::{logging, App, AppConfig};

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    let level = config
        .as_ref()
        .ok()
        .and_then(|config| config.log_level().ok())
        .unwrap_or(log::Level::Info);
    if let Err(err) = logging::init(level) {
        web_sys::console::error_1(&format!("[APP] {}", err).into());
    }

    let config = config.unwrap_or_else(|err| {
        log::warn!("[APP] {}; using default config", err);
        AppConfig::default()
    });
    log::info!("[APP] Mounting at base path {:?}", config.base_path);
    mount_to_body(move || view! { <App config=config /> });
}

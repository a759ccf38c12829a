//! Problem Board Frontend Entry Point
//!
//! Enhances the server-rendered problem board page.

mod app;
mod config;
mod filter;
mod flash;
mod logging;
mod models;
mod sidebar;

fn main() {
    console_error_panic_hook::set_once();

    let (config, warning) = config::load();
    logging::init(config.level_filter());
    if let Some(warning) = warning {
        log::warn!("ignoring page config ({}), using defaults", warning);
    }

    page_dom::on_ready(move || app::init(&config));
}

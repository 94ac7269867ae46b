//! Requisition Dashboard Entry Point

mod api;
mod app;
mod cart;
mod components;
mod config;
mod context;
mod error;
mod format;
mod history;
mod logging;
mod models;
mod print;
mod store;

use app::App;
use config::Config;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = Config::from_document();
    logging::init(config.log_level);
    log::info!("starting, api base {:?}", config.api_base);

    mount_to_body(move || view! { <App config=config.clone() /> });
}

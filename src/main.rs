//! Phone Catalog Frontend Entry Point

mod models;
mod context;
mod store;
mod storage;
mod viewport;
mod hooks;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use tracing::Level;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init_logger("phone-catalog", Level::DEBUG) {
        web_sys::console::error_1(&format!("[MAIN] Logger init failed: {}", e).into());
    }
    mount_to_body(App);
}

//! Family Todo Frontend Entry Point

mod actions;
mod app;
mod bridge;
mod components;
mod config;
mod logger;
mod models;
mod state;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    mount_to_body(App);
}

//! Taskdeck Frontend Entry Point

mod models;
mod tasks;
mod progress;
mod error;
mod context;
mod store;
mod theme;
mod date;
mod markdown;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    mount_to_body(App);
}

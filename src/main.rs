//! Todo Search Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod filter;
mod logger;
mod models;
mod query;
mod render;
mod search;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(AppConfig::default().log_level);
    mount_to_body(App);
}

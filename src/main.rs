#![allow(warnings)]
//! Todo Frontend Entry Point

mod models;
mod error;
mod config;
mod session;
mod commands;
mod store;
mod context;
mod events;
mod components;
mod app;

use app::App;
use config::ClientConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(ClientConfig::from_env().log_level));
    mount_to_body(App);
}

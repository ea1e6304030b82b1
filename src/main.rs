#![allow(warnings)]
//! Food Order Frontend Entry Point

mod catalog;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init_logger("FoodOrder", log::LevelFilter::Info) {
        web_sys::console::warn_1(&format!("logger already installed: {}", e).into());
    }
    mount_to_body(App);
}

#![allow(warnings)]
//! Delivery Orders Frontend Entry Point

mod browser;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    browser::init_logging();
    mount_to_body(App);
}

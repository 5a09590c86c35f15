#![allow(warnings)]
//! Auto Search Popup Entry Point

mod app;
mod chrome;
mod components;
mod context;
mod fill;
mod storage;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    mount_to_body(App);
}

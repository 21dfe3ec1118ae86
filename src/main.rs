//! Shoplist Frontend Entry Point

mod app;
mod components;
mod dialog;
mod edit;
mod filter;
mod registry;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

mod app;
mod components;
mod config;
mod error;
mod features;
mod models;
mod pages;
mod services;

use leptos::prelude::*;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

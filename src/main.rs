//! TechMatch Frontend Entry Point

mod models;
mod data;
mod deck;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::mount::mount_to_body;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

#![recursion_limit = "512"]

#[cfg(any(feature = "ssr", test))]
pub mod admin_auth;
pub mod app;
pub mod booking;
pub mod calendar;
pub mod components;
#[cfg(any(feature = "ssr", test))]
pub mod config;
pub mod content;
pub mod server;
pub mod utils;
pub mod views;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}

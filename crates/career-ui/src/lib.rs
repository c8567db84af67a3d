#![allow(non_snake_case)]
#![recursion_limit = "256"]

pub mod app;
pub mod backend;
pub mod builder;
pub mod components;
pub mod directory;
pub mod pages;
pub mod render;

pub use app::{shell, App};

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}

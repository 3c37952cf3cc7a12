//! Leptos frontend for the storefront (CSR WASM).

pub mod api;
pub mod app;
pub mod cards;
pub mod gate;
pub mod home;
pub mod toast;

use wasm_bindgen::prelude::*;

/// WASM entry point for the frontend.
/// This is called automatically when the WASM module loads.
#[wasm_bindgen(start)]
pub fn main() {
    // Readable panic messages in the browser console.
    console_error_panic_hook::set_once();

    leptos::mount_to_body(app::App);
}

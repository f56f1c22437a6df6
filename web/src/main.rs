//! Feeding Future web front-end
//!
//! Leptos client for the surplus-food app. All navigation and cart logic lives in
//! `feeding-controller`; this crate renders its state and forwards user intent.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Controller `tracing` events arrive here through the `log` facade
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Feeding Future starting");

    hide_loading_screen();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading element from index.html
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available, cannot hide loading screen");
        return;
    };
    if let Some(element) = document.get_element_by_id("app-loading") {
        if let Ok(html) = element.dyn_into::<HtmlElement>() {
            if let Err(e) = html.style().set_property("display", "none") {
                log::warn!("Failed to hide loading screen: {:?}", e);
            }
        }
    }
}

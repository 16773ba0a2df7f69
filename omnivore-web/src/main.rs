//! Omnivore browser entry point
//!
//! Mounts the Leptos app and hides the static loading screen from index.html.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Omnivore starting");

    // Hide loading screen as soon as the WASM module loads
    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the loading screen element
fn hide_loading_screen() {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let document = match window.document() {
        Some(document) => document,
        None => return,
    };

    match document.get_element_by_id("leptos-loading") {
        Some(element) => {
            if let Some(html_element) = element.dyn_ref::<HtmlElement>() {
                html_element.class_list().add_1("hidden").ok();
            }
            // Also set display:none in case the stylesheet has not loaded yet
            element.set_attribute("style", "display: none;").ok();
        }
        None => log::debug!("loading element not found"),
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod catalog;
pub mod profile;
pub mod reveal;
pub mod view_state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // Err only if a logger is already installed, e.g. after a hot reload
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating portfolio ({} projects)", catalog::CATALOG.len());
    leptos::mount::hydrate_body(App);
}

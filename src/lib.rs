#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod config;
pub mod contact;
pub mod section;
pub mod tracking;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a second init (hot reload) only fails to replace the logger
    _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}

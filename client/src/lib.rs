//! # mmp-client
//!
//! Leptos + WASM frontend for the Menara Merah Putih brochure site.
//!
//! Pages are thin route shells; the interactive widgets (quotation form,
//! project gallery, navigation bar, 404 rock-break game, fade-in wrapper,
//! technology comparison) live in `components` and each owns its state from
//! `state`. Browser glue in `util` compiles to no-ops outside `hydrate`.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

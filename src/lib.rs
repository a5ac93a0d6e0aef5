//! # theme-switch
//!
//! WASM theme controller for the wiki's static pages. Persists a
//! light/dark/system preference under one `localStorage` key, mirrors the OS
//! color scheme while the preference is `system`, and drives the
//! `#theme-switch` control's label and click cycle by setting `data-theme`
//! on the page root.
//!
//! Pure preference and transition logic lives in [`state`]; the browser glue
//! in [`util`] is gated behind the `hydrate` feature so the crate builds and
//! tests natively without a document.

pub mod controller;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::*;

/// Module entry point: apply the stored theme, then wire the page controls.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    controller::boot()
}

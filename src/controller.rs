//! Event-driven theme controller: page load, toggle clicks, OS changes.
//!
//! DESIGN
//! ======
//! Each handler re-reads the persisted preference, runs one pure step from
//! `state::transition`, and writes the outcome back through `util`. Handlers
//! share no captured preference state, so callback ordering only matters
//! within a single step. The theme is applied at module start, before the
//! document finishes parsing; control wiring waits for `DOMContentLoaded`.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::state::transition::{self, Step};
use crate::util::{dom, storage, system};

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

/// Persist and apply one transition step.
fn commit(step: Step) {
    if let Some(pref) = step.persist {
        storage::write(pref);
    }
    dom::apply(step.apply);
}

/// Apply the persisted (or just-defaulted) theme at page load.
///
/// Safe to run more than once: an explicit stored preference re-applies
/// unchanged, and the `system` default is only written when nothing usable
/// is stored.
pub fn setup() {
    let step = transition::on_load(storage::read(), system::prefers_dark());
    commit(step);
}

/// Handle one click on the toggle control.
pub fn handle_toggle() {
    let step = transition::on_toggle(storage::read(), system::prefers_dark());
    #[cfg(feature = "hydrate")]
    if let Some(pref) = step.persist {
        log::debug!("theme preference -> {}", pref.as_str());
    }
    commit(step);
    dom::set_toggle_label(step.label);
}

/// Handle one OS scheme-change notification.
///
/// The stored preference is re-read per notification; an explicit choice
/// made since subscription still pins the mode.
pub fn handle_system_change(os_prefers_dark: bool) {
    if let Some(mode) = transition::on_system_change(storage::read(), os_prefers_dark) {
        dom::apply(mode);
    }
}

/// Attach the click and OS-change listeners and sync the control's label.
///
/// A page without the `#theme-switch` control is an integration error and
/// surfaces as `Err`.
#[cfg(feature = "hydrate")]
pub fn wire(document: &web_sys::Document) -> Result<(), JsValue> {
    let control = document
        .get_element_by_id(dom::TOGGLE_ID)
        .ok_or_else(|| JsValue::from_str("theme-switch: no #theme-switch control in page"))?;

    let on_click = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        handle_toggle();
    }) as Box<dyn FnMut(_)>);
    control.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    system::subscribe_changes(handle_system_change);

    dom::set_toggle_label(current_label());
    Ok(())
}

/// Module boot: apply the theme now, wire the controls once the document
/// has parsed.
#[cfg(feature = "hydrate")]
pub fn boot() -> Result<(), JsValue> {
    setup();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("theme-switch: no document"))?;

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let on_ready = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            if let Err(err) = wire(&doc) {
                log::error!("theme-switch: wiring failed: {err:?}");
            }
        }) as Box<dyn FnMut(_)>);
        document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
        on_ready.forget();
    } else {
        wire(&document)?;
    }

    Ok(())
}

/// Label for the currently stored preference, treating absent as `system`.
pub fn current_label() -> &'static str {
    storage::read().unwrap_or_default().label()
}

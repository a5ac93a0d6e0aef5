//! Page-root attribute and toggle-control glue.
//!
//! The applier only accepts a [`ResolvedMode`], so an unresolved `system`
//! preference can never reach the document. Requires a browser environment;
//! the native build is a no-op.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use crate::state::preference::ResolvedMode;

/// Attribute on the page root consumed by the stylesheet.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Id of the toggle control in the static markup.
pub const TOGGLE_ID: &str = "theme-switch";

/// Write the resolved display mode onto the `<html>` element.
pub fn apply(mode: ResolvedMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute(THEME_ATTRIBUTE, mode.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}

/// Overwrite the toggle control's text content.
pub fn set_toggle_label(label: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(control) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(TOGGLE_ID))
        else {
            return;
        };
        control.set_text_content(Some(label));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = label;
    }
}

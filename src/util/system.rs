//! OS color-scheme signal: one-shot query and change subscription.
//!
//! Wraps `matchMedia("(prefers-color-scheme: dark)")`. The subscription leaks
//! its callback (`Closure::forget`); listeners live for the page lifetime.
//! Requires a browser environment; the native build reports light and never
//! fires.

#[cfg(test)]
#[path = "system_test.rs"]
mod system_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Media query expressing the OS dark-mode signal.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Whether the OS currently prefers a dark scheme.
pub fn prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Subscribe `on_change` to OS scheme changes for the page lifetime.
///
/// The callback receives the new dark-mode signal on every notification.
#[cfg(feature = "hydrate")]
pub fn subscribe_changes(mut on_change: impl FnMut(bool) + 'static) {
    let Some(query) = web_sys::window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
    else {
        return;
    };

    let closure = Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
        on_change(event.matches());
    }) as Box<dyn FnMut(_)>);
    let _ = query.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Subscribe `on_change` to OS scheme changes for the page lifetime.
#[cfg(not(feature = "hydrate"))]
pub fn subscribe_changes(on_change: impl FnMut(bool) + 'static) {
    let _ = on_change;
}

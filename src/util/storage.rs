//! `localStorage` accessor for the persisted theme preference.
//!
//! Absent storage, a disabled `localStorage`, and foreign stored values all
//! read as `None`; writes are best-effort and immediate. Requires a browser
//! environment; the native build reads nothing and ignores writes.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::state::preference::ThemePreference;

/// `localStorage` key holding the persisted preference.
pub const STORAGE_KEY: &str = "theme";

/// Read the persisted preference, normalizing foreign values to `None`.
pub fn read() -> Option<ThemePreference> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        ThemePreference::from_stored(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist `pref` immediately.
pub fn write(pref: ThemePreference) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(STORAGE_KEY, pref.as_str());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = pref;
    }
}

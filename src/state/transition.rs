//! Pure transition steps for page load, toggle clicks, and OS scheme changes.
//!
//! DESIGN
//! ======
//! Each event handler in `controller` reduces to one function here that maps
//! (stored preference, OS signal) to a [`Step`]. The controller only performs
//! the side effects the step names, so every documented behavior is testable
//! without a live document.

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

use super::preference::{ResolvedMode, ThemePreference};

/// Outcome of one controller step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// Preference to persist, when the step changes it.
    pub persist: Option<ThemePreference>,
    /// Display mode to write to the page root.
    pub apply: ResolvedMode,
    /// Control text after the step.
    pub label: &'static str,
}

/// Page-load step: apply a stored preference, or default an absent (or
/// foreign) one to `system` before resolving.
pub fn on_load(stored: Option<ThemePreference>, os_prefers_dark: bool) -> Step {
    match stored {
        Some(pref) => Step {
            persist: None,
            apply: pref.resolve(os_prefers_dark),
            label: pref.label(),
        },
        None => Step {
            persist: Some(ThemePreference::System),
            apply: ResolvedMode::from_os(os_prefers_dark),
            label: ThemePreference::System.label(),
        },
    }
}

/// Toggle-click step. An unset preference re-runs the load default path;
/// otherwise the cycle advances and the new preference is persisted.
///
/// Only the step into `system` consults the OS signal; `resolve` leaves
/// explicit modes untouched, so `system -> dark` and `dark -> light` never
/// re-check the OS.
pub fn on_toggle(stored: Option<ThemePreference>, os_prefers_dark: bool) -> Step {
    match stored {
        None => on_load(None, os_prefers_dark),
        Some(current) => {
            let next = current.next();
            Step {
                persist: Some(next),
                apply: next.resolve(os_prefers_dark),
                label: next.label(),
            }
        }
    }
}

/// OS scheme-change step. An explicit `dark`/`light` preference pins the
/// visual mode, so the notification is ignored; `system` or absent follows
/// the new signal.
pub fn on_system_change(
    stored: Option<ThemePreference>,
    os_prefers_dark: bool,
) -> Option<ResolvedMode> {
    match stored {
        None | Some(ThemePreference::System) => Some(ResolvedMode::from_os(os_prefers_dark)),
        Some(_) => None,
    }
}

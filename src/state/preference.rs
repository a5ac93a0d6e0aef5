//! Persisted theme preference and the concrete display mode derived from it.
//!
//! DESIGN
//! ======
//! `ThemePreference` is the only persisted value; `ResolvedMode` is computed
//! on demand and written to the page root, never stored. Parsing is strict:
//! anything but the three canonical tokens reads as absent so a foreign or
//! corrupted stored value can never leak into the cycle.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

/// Persisted three-way theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    /// Follow the OS color scheme.
    #[default]
    System,
    /// Always dark, regardless of the OS.
    Dark,
    /// Always light, regardless of the OS.
    Light,
}

impl ThemePreference {
    /// Parse a stored value. Foreign or corrupted values map to `None`.
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            "system" => Some(Self::System),
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Canonical storage token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Text shown on the toggle control while this preference is active.
    pub fn label(self) -> &'static str {
        match self {
            Self::System => "System theme",
            Self::Dark => "Dark theme",
            Self::Light => "Light theme",
        }
    }

    /// Next preference in the toggle cycle: system -> dark -> light -> system.
    pub fn next(self) -> Self {
        match self {
            Self::System => Self::Dark,
            Self::Dark => Self::Light,
            Self::Light => Self::System,
        }
    }

    /// Resolve to a concrete display mode. Only `System` consults the OS
    /// signal; explicit choices ignore it.
    pub fn resolve(self, os_prefers_dark: bool) -> ResolvedMode {
        match self {
            Self::System => ResolvedMode::from_os(os_prefers_dark),
            Self::Dark => ResolvedMode::Dark,
            Self::Light => ResolvedMode::Light,
        }
    }
}

/// Concrete display mode written to the page root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolvedMode {
    Dark,
    Light,
}

impl ResolvedMode {
    /// Map the OS dark-mode signal to a display mode.
    pub fn from_os(os_prefers_dark: bool) -> Self {
        if os_prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Attribute token written to the page root.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

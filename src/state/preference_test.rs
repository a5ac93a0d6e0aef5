use super::*;

// =============================================================
// Parsing and canonical tokens
// =============================================================

#[test]
fn from_stored_accepts_the_three_canonical_tokens() {
    assert_eq!(
        ThemePreference::from_stored("system"),
        Some(ThemePreference::System)
    );
    assert_eq!(
        ThemePreference::from_stored("dark"),
        Some(ThemePreference::Dark)
    );
    assert_eq!(
        ThemePreference::from_stored("light"),
        Some(ThemePreference::Light)
    );
}

#[test]
fn from_stored_treats_foreign_values_as_absent() {
    assert_eq!(ThemePreference::from_stored(""), None);
    assert_eq!(ThemePreference::from_stored("Dark"), None);
    assert_eq!(ThemePreference::from_stored("auto"), None);
    assert_eq!(ThemePreference::from_stored("dark "), None);
    assert_eq!(ThemePreference::from_stored("0"), None);
}

#[test]
fn as_str_round_trips_through_from_stored() {
    for pref in [
        ThemePreference::System,
        ThemePreference::Dark,
        ThemePreference::Light,
    ] {
        assert_eq!(ThemePreference::from_stored(pref.as_str()), Some(pref));
    }
}

#[test]
fn default_preference_is_system() {
    assert_eq!(ThemePreference::default(), ThemePreference::System);
}

// =============================================================
// Toggle cycle order
// =============================================================

#[test]
fn next_cycles_system_dark_light_system() {
    assert_eq!(ThemePreference::System.next(), ThemePreference::Dark);
    assert_eq!(ThemePreference::Dark.next(), ThemePreference::Light);
    assert_eq!(ThemePreference::Light.next(), ThemePreference::System);
}

#[test]
fn three_steps_return_to_the_starting_preference() {
    let start = ThemePreference::System;
    assert_eq!(start.next().next().next(), start);
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn explicit_preferences_resolve_to_themselves() {
    assert_eq!(ThemePreference::Dark.resolve(false), ResolvedMode::Dark);
    assert_eq!(ThemePreference::Dark.resolve(true), ResolvedMode::Dark);
    assert_eq!(ThemePreference::Light.resolve(false), ResolvedMode::Light);
    assert_eq!(ThemePreference::Light.resolve(true), ResolvedMode::Light);
}

#[test]
fn system_resolves_from_the_os_signal() {
    assert_eq!(ThemePreference::System.resolve(true), ResolvedMode::Dark);
    assert_eq!(ThemePreference::System.resolve(false), ResolvedMode::Light);
}

#[test]
fn resolved_mode_from_os_maps_the_boolean_signal() {
    assert_eq!(ResolvedMode::from_os(true), ResolvedMode::Dark);
    assert_eq!(ResolvedMode::from_os(false), ResolvedMode::Light);
}

#[test]
fn resolved_mode_attribute_tokens() {
    assert_eq!(ResolvedMode::Dark.as_str(), "dark");
    assert_eq!(ResolvedMode::Light.as_str(), "light");
}

// =============================================================
// Labels
// =============================================================

#[test]
fn labels_match_the_control_text() {
    assert_eq!(ThemePreference::System.label(), "System theme");
    assert_eq!(ThemePreference::Dark.label(), "Dark theme");
    assert_eq!(ThemePreference::Light.label(), "Light theme");
}

#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn prefers_dark_is_false_without_a_browser() {
    assert!(!prefers_dark());
}

#[test]
fn subscribe_changes_is_noop_but_callable() {
    subscribe_changes(|_| {});
}

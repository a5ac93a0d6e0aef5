#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_is_none_without_a_browser() {
    assert_eq!(read(), None);
}

#[test]
fn write_is_noop_but_callable() {
    write(ThemePreference::Dark);
    assert_eq!(read(), None);
}

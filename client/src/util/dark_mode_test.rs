#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_false_without_browser_storage() {
    assert!(!read_preference());
}

#[test]
fn theme_name_per_flag() {
    assert_eq!(theme_name(true), "dark");
    assert_eq!(theme_name(false), "light");
}

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}

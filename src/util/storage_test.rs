#![cfg(not(feature = "hydrate"))]

use super::*;

use effects::theme::{THEME_STORAGE_KEY, Theme, ThemeController};

#[test]
fn store_is_memory_backed_in_non_hydrate_tests() {
    assert!(!LocalStore::open().is_persistent());
}

#[test]
fn values_round_trip_through_fallback() {
    let mut store = LocalStore::open();
    assert_eq!(store.get("theme"), None);
    store.set("theme", "dark").unwrap();
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn theme_controller_persists_through_local_store() {
    let mut controller = ThemeController::load(LocalStore::open(), false);
    assert_eq!(controller.theme(), Theme::Light);
    assert_eq!(controller.toggle().unwrap(), Theme::Dark);
    assert_eq!(controller.store().get(THEME_STORAGE_KEY).as_deref(), Some("dark"));
}

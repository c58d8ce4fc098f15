use super::*;
use roster::MemoryStore;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_light_with_email_notifications() {
    let state = UiState::default();
    assert!(!state.settings.dark_mode);
    assert!(state.settings.email_notifications);
    assert!(!state.nav_open);
}

// =============================================================
// Settings persistence
// =============================================================

#[test]
fn nothing_stored_reads_as_none() {
    assert_eq!(UiState::stored_settings(&MemoryStore::new()), None);
}

#[test]
fn toggle_dark_mode_persists_under_user_settings() {
    let store = MemoryStore::new();
    let mut state = UiState::default();

    assert_eq!(state.toggle_dark_mode(&store), Ok(true));
    let stored = UiState::stored_settings(&store).expect("stored");
    assert!(stored.dark_mode);
    assert!(stored.email_notifications);

    assert_eq!(state.toggle_dark_mode(&store), Ok(false));
    assert!(!UiState::stored_settings(&store).expect("stored").dark_mode);
}

#[test]
fn save_settings_round_trips_notification_flags() {
    let store = MemoryStore::new();
    let mut state = UiState::default();
    let settings = UserSettings { dark_mode: false, email_notifications: false, push_notifications: true };
    state.save_settings(&store, settings.clone()).expect("save");
    assert_eq!(UiState::stored_settings(&store), Some(settings));
}

use super::*;
use roster::MemoryStore;

fn user() -> User {
    User {
        id: 4,
        username: "ann".to_owned(),
        email: "ann@example.com".to_owned(),
        first_name: "Ann".to_owned(),
        last_name: "Lee".to_owned(),
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

// =============================================================
// Persistence
// =============================================================

#[test]
fn sign_in_persists_token_and_user() {
    let store = MemoryStore::new();
    let mut state = AuthState::default();
    state.sign_in(&store, AuthResponse { token: "abc".to_owned(), user: user() }).expect("persist");

    assert!(state.is_authenticated());
    assert_eq!(store.get_item(keys::AUTH_TOKEN).as_deref(), Some("abc"));
    assert_eq!(AuthState::restore(&store), state);
}

#[test]
fn restore_without_token_is_signed_out() {
    let store = MemoryStore::new();
    save_json(&store, keys::USER_DATA, &user()).expect("seed");
    let state = AuthState::restore(&store);
    assert!(!state.loading);
    assert!(state.user.is_none());
}

#[test]
fn restore_with_corrupt_user_is_signed_out() {
    let store = MemoryStore::new();
    store.set_item(keys::AUTH_TOKEN, "abc").expect("seed");
    store.set_item(keys::USER_DATA, "{not json").expect("seed");
    assert!(!AuthState::restore(&store).is_authenticated());
}

#[test]
fn sign_out_clears_storage() {
    let store = MemoryStore::new();
    let mut state = AuthState::default();
    state.sign_in(&store, AuthResponse { token: "abc".to_owned(), user: user() }).expect("persist");
    state.sign_out(&store);

    assert!(store.is_empty());
    assert!(!state.is_authenticated());
    assert_eq!(state.display_name(), "");
}

#[test]
fn display_name_uses_full_name() {
    let state = AuthState { user: Some(user()), token: Some("t".to_owned()), loading: false };
    assert_eq!(state.display_name(), "Ann Lee");
}

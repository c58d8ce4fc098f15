use super::*;
use crate::net::types::User;

fn user() -> User {
    User {
        id: 1,
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        first_name: String::new(),
        last_name: String::new(),
    }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, token: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { user: None, token: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState { user: Some(user()), token: Some("t".to_owned()), loading: false };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn user_without_token_is_redirected() {
    let state = AuthState { user: Some(user()), token: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

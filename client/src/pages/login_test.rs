use super::*;

#[test]
fn validate_login_input_trims_username() {
    let request = validate_login_input("  alice ", "secret").unwrap();
    assert_eq!(request.username, "alice");
    assert_eq!(request.password, "secret");
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    let request = validate_login_input("alice", " pw ").unwrap();
    assert_eq!(request.password, " pw ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter your username and password."));
    assert_eq!(validate_login_input("alice", ""), Err("Enter your username and password."));
}

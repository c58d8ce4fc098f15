use super::*;

#[test]
fn unset_or_blank_falls_back_to_local_backend() {
    assert_eq!(resolve_api_base(None), DEFAULT_API_URL);
    assert_eq!(resolve_api_base(Some("   ")), DEFAULT_API_URL);
}

#[test]
fn trailing_slash_is_dropped() {
    assert_eq!(resolve_api_base(Some("https://api.rollcall.test/")), "https://api.rollcall.test");
}

#[test]
fn api_url_joins_origin_and_path() {
    assert!(api_url("/api/events/").ends_with("/api/events/"));
    assert!(!api_url("/api/events/").contains("//api"));
}

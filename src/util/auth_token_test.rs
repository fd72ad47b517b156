use super::*;

// =============================================================
// normalize_stored_token
// =============================================================

#[test]
fn normalize_keeps_real_tokens() {
    assert_eq!(
        normalize_stored_token(Some("t-123".to_owned())),
        Some("t-123".to_owned())
    );
}

#[test]
fn normalize_rejects_missing_value() {
    assert_eq!(normalize_stored_token(None), None);
}

#[test]
fn normalize_rejects_blank_value() {
    assert_eq!(normalize_stored_token(Some("   ".to_owned())), None);
    assert_eq!(normalize_stored_token(Some(String::new())), None);
}

// =============================================================
// Server-side stubs
// =============================================================

#[test]
fn read_token_returns_none_outside_the_browser() {
    assert!(read_token().is_none());
}

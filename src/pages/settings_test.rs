use super::*;

// =============================================================
// Profile validation
// =============================================================

#[test]
fn validate_profile_input_trims_name() {
    assert_eq!(validate_profile_input("  Ann  "), Ok("Ann".to_owned()));
}

#[test]
fn validate_profile_input_rejects_blank_name() {
    assert_eq!(validate_profile_input("   "), Err("Display name cannot be empty."));
}

// =============================================================
// Avatar normalization
// =============================================================

#[test]
fn normalize_avatar_input_treats_blank_as_none() {
    assert_eq!(normalize_avatar_input("  "), None);
    assert_eq!(normalize_avatar_input(""), None);
}

#[test]
fn normalize_avatar_input_trims_url() {
    assert_eq!(
        normalize_avatar_input(" https://example.com/a.png "),
        Some("https://example.com/a.png".to_owned())
    );
}

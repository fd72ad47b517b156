use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}

#[test]
fn ui_state_default_sidebar_expanded_search_closed() {
    let state = UiState::default();
    assert!(state.sidebar_expanded);
    assert!(!state.search_open);
}

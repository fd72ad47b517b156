use super::*;

fn message(id: &str, from: &str, to: &str) -> ChatMessage {
    ChatMessage {
        id: id.to_owned(),
        from: from.to_owned(),
        to: to.to_owned(),
        content: "hi".to_owned(),
        timestamp: "2026-01-05T10:30:00Z".to_owned(),
    }
}

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_empty_messages() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert!(state.seen_ids.is_empty());
    assert!(state.active.is_none());
}

#[test]
fn chat_state_default_disconnected() {
    let state = ChatState::default();
    assert_eq!(state.connection_status, ConnectionStatus::Disconnected);
    assert!(!state.is_connected());
}

// =============================================================
// ConnectionStatus
// =============================================================

#[test]
fn connection_status_default_is_disconnected() {
    assert_eq!(ConnectionStatus::default(), ConnectionStatus::Disconnected);
}

#[test]
fn only_connected_counts_as_connected() {
    let mut state = ChatState::default();
    state.connection_status = ConnectionStatus::Connecting;
    assert!(!state.is_connected());
    state.connection_status = ConnectionStatus::Connected;
    assert!(state.is_connected());
}

// =============================================================
// Thread filtering
// =============================================================

#[test]
fn messages_with_keeps_both_directions_in_arrival_order() {
    let mut state = ChatState::default();
    state.messages = vec![
        message("m1", "me", "peer"),
        message("m2", "other", "me"),
        message("m3", "peer", "me"),
    ];

    let thread = state.messages_with("me", "peer");
    let ids: Vec<&str> = thread.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["m1", "m3"]);
}

#[test]
fn messages_with_excludes_unrelated_conversations() {
    let mut state = ChatState::default();
    state.messages = vec![message("m1", "a", "b")];
    assert!(state.messages_with("me", "peer").is_empty());
}

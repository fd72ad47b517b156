use super::*;

// =============================================================
// sendMessage guard
// =============================================================

#[test]
fn send_message_event_carries_all_fields() {
    let event = send_message_event("A", "B", "hi").expect("non-empty content should build");
    assert_eq!(
        event,
        ChannelEvent::SendMessage {
            from: "A".to_owned(),
            to: "B".to_owned(),
            content: "hi".to_owned(),
        }
    );
}

#[test]
fn send_message_event_suppresses_empty_content() {
    assert!(send_message_event("A", "B", "").is_none());
}

#[test]
fn send_message_event_suppresses_whitespace_only_content() {
    assert!(send_message_event("A", "B", "   \n\t ").is_none());
}

#[test]
fn send_message_event_keeps_interior_whitespace_verbatim() {
    let event = send_message_event("A", "B", "  hi there  ").expect("content should build");
    let ChannelEvent::SendMessage { content, .. } = event else {
        panic!("expected sendMessage event");
    };
    assert_eq!(content, "  hi there  ");
}

// =============================================================
// Room signals
// =============================================================

#[test]
fn join_and_leave_events_wrap_conversation_id() {
    assert_eq!(
        join_conversation_event("c1"),
        ChannelEvent::JoinConversation("c1".to_owned())
    );
    assert_eq!(
        leave_conversation_event("c1"),
        ChannelEvent::LeaveConversation("c1".to_owned())
    );
}

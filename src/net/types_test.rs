use super::*;

fn message() -> ChatMessage {
    ChatMessage {
        id: "m1".to_owned(),
        from: "u1".to_owned(),
        to: "u2".to_owned(),
        content: "hi".to_owned(),
        timestamp: "2026-01-05T10:30:00Z".to_owned(),
    }
}

// =============================================================
// ChannelEvent wire names
// =============================================================

#[test]
fn send_message_event_serializes_with_camel_case_tag() {
    let event = ChannelEvent::SendMessage {
        from: "u1".to_owned(),
        to: "u2".to_owned(),
        content: "hello".to_owned(),
    };
    let json = serde_json::to_value(&event).expect("event should serialize");
    assert_eq!(json["event"], "sendMessage");
    assert_eq!(json["data"]["from"], "u1");
    assert_eq!(json["data"]["to"], "u2");
    assert_eq!(json["data"]["content"], "hello");
}

#[test]
fn join_and_leave_events_carry_conversation_id_as_data() {
    let join = serde_json::to_value(ChannelEvent::JoinConversation("c1".to_owned()))
        .expect("join should serialize");
    assert_eq!(join["event"], "joinConversation");
    assert_eq!(join["data"], "c1");

    let leave = serde_json::to_value(ChannelEvent::LeaveConversation("c1".to_owned()))
        .expect("leave should serialize");
    assert_eq!(leave["event"], "leaveConversation");
    assert_eq!(leave["data"], "c1");
}

#[test]
fn receive_message_event_deserializes_from_server_shape() {
    let json = serde_json::json!({
        "event": "receiveMessage",
        "data": {
            "id": "m1",
            "from": "u1",
            "to": "u2",
            "content": "hi",
            "timestamp": "2026-01-05T10:30:00Z"
        }
    });
    let event: ChannelEvent =
        serde_json::from_value(json).expect("receiveMessage should deserialize");
    assert_eq!(event, ChannelEvent::ReceiveMessage(message()));
}

#[test]
fn unknown_event_name_fails_to_deserialize() {
    let json = serde_json::json!({ "event": "typingIndicator", "data": {} });
    assert!(serde_json::from_value::<ChannelEvent>(json).is_err());
}

// =============================================================
// REST DTOs
// =============================================================

#[test]
fn auth_response_deserializes_token_and_user() {
    let json = serde_json::json!({
        "token": "t-123",
        "user": { "id": "u1", "name": "Ann", "email": "ann@example.com", "avatar_url": null }
    });
    let resp: AuthResponse = serde_json::from_value(json).expect("auth response should parse");
    assert_eq!(resp.token, "t-123");
    assert_eq!(resp.user.name, "Ann");
    assert!(resp.user.avatar_url.is_none());
}

#[test]
fn conversation_preview_fields_are_optional() {
    let json = serde_json::json!({
        "id": "c1",
        "participant": { "id": "u2", "name": "Bob", "email": "bob@example.com", "avatar_url": null },
        "last_message": null,
        "updated_at": null
    });
    let convo: Conversation = serde_json::from_value(json).expect("conversation should parse");
    assert!(convo.last_message.is_none());
    assert!(convo.updated_at.is_none());
}

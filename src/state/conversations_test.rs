use super::*;
use crate::net::types::User;

fn convo(id: &str) -> Conversation {
    Conversation {
        id: id.to_owned(),
        participant: User {
            id: format!("peer-{id}"),
            name: "Bob".to_owned(),
            email: "bob@example.com".to_owned(),
            avatar_url: None,
        },
        last_message: None,
        updated_at: None,
    }
}

// =============================================================
// ConversationsState defaults
// =============================================================

#[test]
fn conversations_state_default_empty() {
    let state = ConversationsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
}

// =============================================================
// replace / upsert_front
// =============================================================

#[test]
fn replace_swaps_items_and_clears_loading() {
    let mut state = ConversationsState { items: vec![convo("c1")], loading: true };
    state.replace(vec![convo("c2"), convo("c3")]);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].id, "c2");
    assert!(!state.loading);
}

#[test]
fn upsert_front_inserts_new_conversation_first() {
    let mut state = ConversationsState::default();
    state.upsert_front(convo("c1"));
    state.upsert_front(convo("c2"));
    assert_eq!(state.items[0].id, "c2");
    assert_eq!(state.items[1].id, "c1");
}

#[test]
fn upsert_front_moves_existing_conversation_without_duplicating() {
    let mut state = ConversationsState::default();
    state.upsert_front(convo("c1"));
    state.upsert_front(convo("c2"));
    state.upsert_front(convo("c1"));
    let ids: Vec<&str> = state.items.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c2"]);
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::collections::HashSet;

use crate::net::types::{ChatMessage, Conversation};

/// State for the chat view: the live message list, the id index used for
/// duplicate suppression, the active conversation, and the channel's
/// connection status.
///
/// The message list is append-only in arrival order and lives exactly as long
/// as the chat view. `seen_ids` mirrors the list so membership checks stay
/// O(1); the two always hold the same set of ids.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub active: Option<Conversation>,
    pub messages: Vec<ChatMessage>,
    pub seen_ids: HashSet<String>,
    pub connection_status: ConnectionStatus,
    pub history_loading: bool,
}

impl ChatState {
    /// Whether the realtime channel currently has an open transport.
    ///
    /// `Connecting` counts as not connected: the flag is true strictly
    /// between a transport open and the next close.
    pub fn is_connected(&self) -> bool {
        self.connection_status == ConnectionStatus::Connected
    }

    /// Messages exchanged between the signed-in user and one peer, in
    /// arrival order.
    pub fn messages_with<'a>(&'a self, me: &str, peer: &str) -> Vec<&'a ChatMessage> {
        self.messages
            .iter()
            .filter(|m| {
                (m.from == me && m.to == peer) || (m.from == peer && m.to == me)
            })
            .collect()
    }
}

/// Realtime channel connection status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

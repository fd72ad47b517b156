#[cfg(test)]
#[path = "conversations_test.rs"]
mod conversations_test;

use crate::net::types::Conversation;

/// Sidebar conversation list state, backed by the REST conversations API and
/// refreshed whenever the realtime channel appends a new message.
#[derive(Clone, Debug, Default)]
pub struct ConversationsState {
    pub items: Vec<Conversation>,
    pub loading: bool,
}

impl ConversationsState {
    /// Replace the list with a fresh fetch result.
    pub fn replace(&mut self, items: Vec<Conversation>) {
        self.items = items;
        self.loading = false;
    }

    /// Insert a newly created conversation at the top, or surface the
    /// existing entry if the server returned one we already know.
    pub fn upsert_front(&mut self, convo: Conversation) {
        if let Some(pos) = self.items.iter().position(|c| c.id == convo.id) {
            self.items.remove(pos);
        }
        self.items.insert(0, convo);
    }
}

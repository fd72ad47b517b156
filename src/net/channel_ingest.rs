//! Inbound event application extracted from `channel`.
//!
//! DESIGN
//! ======
//! These functions mutate plain [`ChatState`] so the channel's only real
//! logic — duplicate suppression and connection-flag transitions — is
//! testable without a browser or a live socket. The channel's dispatch loop
//! wraps them in signal updates.

#[cfg(test)]
#[path = "channel_ingest_test.rs"]
mod channel_ingest_test;

use crate::net::types::ChatMessage;
use crate::state::chat::{ChatState, ConnectionStatus};

/// Transport opened: the channel is live.
pub(super) fn apply_transport_connected(chat: &mut ChatState) {
    chat.connection_status = ConnectionStatus::Connected;
}

/// Transport closed or errored: the channel is down until a reconnect.
pub(super) fn apply_transport_disconnected(chat: &mut ChatState) {
    chat.connection_status = ConnectionStatus::Disconnected;
}

/// Ingest one inbound message.
///
/// Returns `true` if the message id was unseen and the message was appended;
/// `false` if it was a duplicate delivery (e.g. a reconnection replay) and
/// was discarded. The id index and the ordered list move together, so
/// redelivery can never produce a second entry.
pub(super) fn apply_receive_message(chat: &mut ChatState, msg: ChatMessage) -> bool {
    if !chat.seen_ids.insert(msg.id.clone()) {
        return false;
    }
    chat.messages.push(msg);
    true
}

/// Replace the message list with a REST history fetch.
///
/// The id index is rebuilt from the new list, deduplicating within the
/// history itself, so subsequent live deliveries of historical messages are
/// still discarded.
pub(super) fn apply_history(chat: &mut ChatState, history: Vec<ChatMessage>) {
    chat.messages.clear();
    chat.seen_ids.clear();
    for msg in history {
        if chat.seen_ids.insert(msg.id.clone()) {
            chat.messages.push(msg);
        }
    }
    chat.history_loading = false;
}

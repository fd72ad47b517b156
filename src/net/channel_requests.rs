//! Outbound event builders extracted from `channel`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Multiple UI surfaces emit events over the channel. Centralizing envelope
//! construction prevents drift across call sites and keeps the empty-content
//! guard in one place.

#[cfg(test)]
#[path = "channel_requests_test.rs"]
mod channel_requests_test;

use crate::net::types::ChannelEvent;

/// Build a `sendMessage` event, or `None` when the trimmed content is empty.
///
/// Suppressing empty payloads here means no caller can emit a blank message,
/// whatever input handling sits above.
pub(super) fn send_message_event(from: &str, to: &str, content: &str) -> Option<ChannelEvent> {
    if content.trim().is_empty() {
        return None;
    }
    Some(ChannelEvent::SendMessage {
        from: from.to_owned(),
        to: to.to_owned(),
        content: content.to_owned(),
    })
}

/// Build a `joinConversation` room signal.
pub(super) fn join_conversation_event(conversation_id: &str) -> ChannelEvent {
    ChannelEvent::JoinConversation(conversation_id.to_owned())
}

/// Build a `leaveConversation` room signal.
pub(super) fn leave_conversation_event(conversation_id: &str) -> ChannelEvent {
    ChannelEvent::LeaveConversation(conversation_id.to_owned())
}

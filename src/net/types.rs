//! Shared wire-protocol DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types intentionally mirror the server's REST and WebSocket payloads
//! so serde round-trips stay lossless and channel dispatch code can remain
//! schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the `/api/auth/me` endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Avatar image URL, if set.
    pub avatar_url: Option<String>,
}

/// A direct conversation between the current user and one other participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique conversation identifier (UUID string). Doubles as the realtime
    /// room identifier.
    pub id: String,
    /// The other participant.
    pub participant: User,
    /// Preview text of the most recent message, if any.
    pub last_message: Option<String>,
    /// ISO 8601 timestamp of the most recent activity, if any.
    pub updated_at: Option<String>,
}

/// A single chat message.
///
/// Identity is `id`, assigned by the server. Messages are immutable once
/// received; the client only ever appends new ones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Server-assigned message identifier (UUID string).
    pub id: String,
    /// Sender user id.
    pub from: String,
    /// Recipient user id.
    pub to: String,
    /// Message body.
    pub content: String,
    /// ISO 8601 creation timestamp from the server.
    pub timestamp: String,
}

/// A single event on the realtime channel, as a tagged JSON envelope:
/// `{"event": "<name>", "data": <payload>}`.
///
/// Transport open/close are not events on the wire; they surface through the
/// WebSocket lifecycle itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum ChannelEvent {
    /// Outbound: deliver `content` from one user to another.
    #[serde(rename = "sendMessage")]
    SendMessage {
        /// Sender user id.
        from: String,
        /// Recipient user id.
        to: String,
        /// Message body.
        content: String,
    },
    /// Inbound: a message accepted and stamped by the server.
    #[serde(rename = "receiveMessage")]
    ReceiveMessage(ChatMessage),
    /// Outbound: advisory room-membership signal for a conversation.
    #[serde(rename = "joinConversation")]
    JoinConversation(String),
    /// Outbound: advisory room-departure signal for a conversation.
    #[serde(rename = "leaveConversation")]
    LeaveConversation(String),
}

/// Successful response from the login and register endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Bearer token for subsequent REST calls and the channel handshake.
    pub token: String,
    /// The authenticated user.
    pub user: User,
}

//! Networking modules for HTTP + the realtime message channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `channel` manages the WebSocket lifecycle, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod channel;
pub mod types;

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chat chrome and interaction surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod conversation_list;
pub mod message_thread;
pub mod status_bar;
pub mod user_search;

//! Bottom status bar showing channel connection status and thread info.

use leptos::prelude::*;

use crate::state::chat::{ChatState, ConnectionStatus};

/// Status bar at the bottom of the chat page.
///
/// Shows the realtime connection indicator, the active conversation, and the
/// live message count.
#[component]
pub fn StatusBar() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let status_class = move || {
        let status = chat.get().connection_status;
        match status {
            ConnectionStatus::Connected => "status-bar__dot status-bar__dot--connected",
            ConnectionStatus::Connecting => "status-bar__dot status-bar__dot--connecting",
            ConnectionStatus::Disconnected => "status-bar__dot status-bar__dot--disconnected",
        }
    };

    let status_label = move || {
        let status = chat.get().connection_status;
        match status {
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::Connecting => "Connecting...",
            ConnectionStatus::Disconnected => "Disconnected",
        }
    };

    let active_name = move || {
        chat.get()
            .active
            .map(|a| a.participant.name)
            .unwrap_or_default()
    };
    let message_count = move || chat.get().messages.len();

    view! {
        <div class="status-bar">
            <span class="status-bar__connection">
                <span class=status_class></span>
                {status_label}
            </span>
            <span class="status-bar__divider">"|"</span>
            <span class="status-bar__active">{active_name}</span>
            <span class="status-bar__spacer"></span>
            <span class="status-bar__messages">{move || format!("{} messages", message_count())}</span>
        </div>
    }
}

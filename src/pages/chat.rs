//! Main chat page: conversation sidebar, message thread, realtime channel.
//!
//! ARCHITECTURE
//! ============
//! The page owns the realtime channel lifecycle: it is opened when the page
//! mounts, closed on cleanup, and its sender handle is re-provided through
//! context so the sidebar and thread can emit events. Room membership follows
//! the active conversation, and the message-observed hook refreshes the
//! sidebar whenever a new message lands.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::conversation_list::ConversationList;
use crate::components::message_thread::MessageThread;
use crate::components::status_bar::StatusBar;
use crate::components::user_search::UserSearch;
use crate::net::channel::ChannelSender;
use crate::state::auth::AuthState;
use crate::state::chat::ChatState;
use crate::state::conversations::ConversationsState;
use crate::state::ui::UiState;

/// Fetch the conversation list into state.
#[cfg(feature = "hydrate")]
pub(crate) fn refresh_conversations(conversations: RwSignal<ConversationsState>) {
    conversations.update(|s| s.loading = true);
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_conversations().await {
            Some(items) => conversations.update(|s| s.replace(items)),
            None => conversations.update(|s| s.loading = false),
        }
    });
}

/// Chat page — requires an authenticated session.
#[component]
pub fn ChatPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let conversations = expect_context::<RwSignal<ConversationsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let sender = expect_context::<RwSignal<ChannelSender>>();

    crate::util::auth::install_unauth_redirect(auth, use_navigate());

    // Open the channel for the lifetime of this page. Cleanup closes the
    // socket loop and drops the observer registration.
    #[cfg(feature = "hydrate")]
    {
        let channel = std::rc::Rc::new(crate::net::channel::spawn_message_channel(chat));
        sender.set(channel.sender());

        crate::net::channel::set_message_observer(move |_msg| {
            refresh_conversations(conversations);
        });

        on_cleanup(move || {
            crate::net::channel::clear_message_observer();
            channel.close();
            sender.set(ChannelSender::default());
        });

        refresh_conversations(conversations);
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = conversations;

    // Follow the active conversation with room membership and history.
    let active_id = Memo::new(move |_| chat.with(|c| c.active.as_ref().map(|a| a.id.clone())));
    let last_joined = RwSignal::new(None::<String>);

    Effect::new(move || {
        let current = active_id.get();
        if last_joined.get_untracked() == current {
            return;
        }

        let s = sender.get_untracked();
        if let Some(prev) = last_joined.get_untracked() {
            s.leave_conversation(&prev);
        }
        if let Some(id) = current.clone() {
            s.join_conversation(&id);
            chat.update(|c| c.history_loading = true);

            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_messages(&id).await {
                    Some(history) => crate::net::channel::ingest_history(chat, history),
                    None => chat.update(|c| c.history_loading = false),
                }
            });
        }
        last_joined.set(current);
    });

    let search_open = move || ui.get().search_open;
    let sidebar_class = move || {
        if ui.get().sidebar_expanded {
            "chat-page__sidebar"
        } else {
            "chat-page__sidebar chat-page__sidebar--collapsed"
        }
    };

    view! {
        <div class="chat-page">
            <aside class=sidebar_class>
                <header class="chat-page__sidebar-header">
                    <h1>"Courier"</h1>
                    <button
                        class="btn chat-page__search-toggle"
                        on:click=move |_| ui.update(|u| u.search_open = !u.search_open)
                    >
                        {move || if search_open() { "Close" } else { "New chat" }}
                    </button>
                    <a class="btn chat-page__settings-link" href="/settings">
                        "Settings"
                    </a>
                </header>

                <Show when=search_open>
                    <UserSearch/>
                </Show>

                <ConversationList/>
            </aside>

            <main class="chat-page__main">
                <MessageThread/>
                <StatusBar/>
            </main>
        </div>
    }
}

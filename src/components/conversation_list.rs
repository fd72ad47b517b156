//! Sidebar list of conversations with selection.

use leptos::prelude::*;

use crate::state::chat::ChatState;
use crate::state::conversations::ConversationsState;

/// Conversation sidebar — selecting an entry makes it the active thread.
#[component]
pub fn ConversationList() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let conversations = expect_context::<RwSignal<ConversationsState>>();

    view! {
        <div class="conversation-list">
            {move || {
                let state = conversations.get();
                if state.loading && state.items.is_empty() {
                    return view! {
                        <div class="conversation-list__empty">"Loading conversations..."</div>
                    }
                        .into_any();
                }
                if state.items.is_empty() {
                    return view! {
                        <div class="conversation-list__empty">"No conversations yet"</div>
                    }
                        .into_any();
                }

                let active_id = chat.get().active.map(|a| a.id);
                let today = crate::util::time::today_date();
                state
                    .items
                    .iter()
                    .map(|convo| {
                        let selected = active_id.as_deref() == Some(convo.id.as_str());
                        let class = if selected {
                            "conversation-list__item conversation-list__item--active"
                        } else {
                            "conversation-list__item"
                        };
                        let name = convo.participant.name.clone();
                        let preview = convo.last_message.clone().unwrap_or_default();
                        let when = convo
                            .updated_at
                            .as_deref()
                            .map(|ts| crate::util::time::activity_label(ts, &today))
                            .unwrap_or_default();
                        let chosen = convo.clone();
                        view! {
                            <button
                                class=class
                                on:click=move |_| {
                                    chat.update(|c| c.active = Some(chosen.clone()));
                                }
                            >
                                <span class="conversation-list__name">{name}</span>
                                <span class="conversation-list__preview">{preview}</span>
                                <span class="conversation-list__time">{when}</span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}

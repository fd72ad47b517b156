//! Message thread for the active conversation, with the send input.

use leptos::prelude::*;

use crate::net::channel::ChannelSender;
use crate::state::auth::AuthState;
use crate::state::chat::ChatState;

/// Thread view showing the active conversation's messages and an input for
/// sending new ones. Sends go over the realtime channel when it is open and
/// fall back to the HTTP creation path when it is not.
#[component]
pub fn MessageThread() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let sender = expect_context::<RwSignal<ChannelSender>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the viewport pinned to the newest message.
    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get();
        if text.trim().is_empty() {
            return;
        }
        let state = chat.get_untracked();
        let Some(active) = state.active else {
            return;
        };
        let Some(me) = auth.get_untracked().user_id().map(ToOwned::to_owned) else {
            return;
        };
        let peer = active.participant.id.clone();

        if !sender.get_untracked().send_message(&me, &peer, &text) {
            // Channel down: hand the message to the REST path instead. The
            // server's copy is ingested like an inbound event, which also
            // fires the sidebar-refresh observer.
            #[cfg(feature = "hydrate")]
            {
                let content = text.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::send_message(&peer, &content).await {
                        Ok(created) => crate::net::channel::ingest_message(chat, created),
                        Err(e) => leptos::logging::warn!("message send fallback failed: {e}"),
                    }
                });
            }
        }
        input.set(String::new());
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let placeholder = move || {
        chat.get()
            .active
            .map(|a| format!("Message {}...", a.participant.name))
            .unwrap_or_else(|| "Select a conversation".to_owned())
    };

    let can_send = move || !input.get().trim().is_empty() && chat.get().active.is_some();

    view! {
        <div class="message-thread">
            <div class="message-thread__messages" node_ref=messages_ref>
                {move || {
                    let state = chat.get();
                    let Some(active) = state.active.clone() else {
                        return view! {
                            <div class="message-thread__empty">"Pick a conversation to start"</div>
                        }
                            .into_any();
                    };
                    if state.history_loading {
                        return view! {
                            <div class="message-thread__empty">"Loading messages..."</div>
                        }
                            .into_any();
                    }

                    let me = auth.get().user_id().map(ToOwned::to_owned).unwrap_or_default();
                    let thread = state.messages_with(&me, &active.participant.id);
                    if thread.is_empty() {
                        return view! {
                            <div class="message-thread__empty">"No messages yet"</div>
                        }
                            .into_any();
                    }

                    thread
                        .iter()
                        .map(|msg| {
                            let mine = msg.from == me;
                            let class = if mine {
                                "message-thread__bubble message-thread__bubble--mine"
                            } else {
                                "message-thread__bubble"
                            };
                            let content = msg.content.clone();
                            let when = crate::util::time::clock_label(&msg.timestamp);
                            view! {
                                <div class=class>
                                    <span class="message-thread__text">{content}</span>
                                    <span class="message-thread__time">{when}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            <div class="message-thread__input-row">
                <input
                    class="message-thread__input"
                    type="text"
                    placeholder=placeholder
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary message-thread__send"
                    on:click=on_click
                    disabled=move || !can_send()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}

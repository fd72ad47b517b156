//! User search panel for starting a new conversation.

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::chat::ChatState;
use crate::state::conversations::ConversationsState;
use crate::state::ui::UiState;

/// Search box plus result list. Picking a result creates (or resurfaces) the
/// direct conversation with that user and makes it active.
#[component]
pub fn UserSearch() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let conversations = expect_context::<RwSignal<ConversationsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let query = RwSignal::new(String::new());
    let results = RwSignal::new(Vec::<User>::new());
    let searching = RwSignal::new(false);

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let q = query.get().trim().to_owned();
        if q.is_empty() || searching.get() {
            return;
        }
        searching.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let found = crate::net::api::search_users(&q).await.unwrap_or_default();
            results.set(found);
            searching.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = q;
        }
    };

    let pick_user = move |user: User| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_conversation(&user.id).await {
                Ok(convo) => {
                    conversations.update(|s| s.upsert_front(convo.clone()));
                    chat.update(|c| c.active = Some(convo));
                    ui.update(|u| u.search_open = false);
                    results.set(Vec::new());
                    query.set(String::new());
                }
                Err(e) => {
                    leptos::logging::warn!("conversation create failed: {e}");
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user;
        }
    };

    view! {
        <div class="user-search">
            <form class="user-search__form" on:submit=on_search>
                <input
                    class="user-search__input"
                    type="text"
                    placeholder="Search people..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button class="btn user-search__go" type="submit" disabled=move || searching.get()>
                    "Search"
                </button>
            </form>

            <div class="user-search__results">
                {move || {
                    results
                        .get()
                        .into_iter()
                        .map(|user| {
                            let name = user.name.clone();
                            let email = user.email.clone();
                            view! {
                                <button
                                    class="user-search__result"
                                    on:click=move |_| pick_user(user.clone())
                                >
                                    <span class="user-search__name">{name.clone()}</span>
                                    <span class="user-search__email">{email.clone()}</span>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}

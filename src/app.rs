//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::channel::ChannelSender;
use crate::pages::{chat::ChatPage, login::LoginPage, settings::SettingsPage};
use crate::state::{
    auth::AuthState, chat::ChatState, conversations::ConversationsState, ui::UiState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, restores the signed-in session from
/// the persisted bearer token, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let auth = RwSignal::new(AuthState { user: None, loading: true });
    let chat = RwSignal::new(ChatState::default());
    let conversations = RwSignal::new(ConversationsState::default());
    let ui = RwSignal::new(UiState::default());
    let sender = RwSignal::new(ChannelSender::default());

    provide_context(auth);
    provide_context(chat);
    provide_context(conversations);
    provide_context(ui);
    provide_context(sender);

    // Restore the session for the persisted token, if one exists.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            auth.update(|a| {
                a.user = user;
                a.loading = false;
            });
        });
    });

    // Apply the persisted dark-mode preference once at startup.
    Effect::new(move || {
        let enabled = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(enabled);
        ui.update(|u| u.dark_mode = enabled);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/courier.css"/>
        <Title text="Courier"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("settings") view=SettingsPage/>
                <Route path=StaticSegment("") view=ChatPage/>
            </Routes>
        </Router>
    }
}

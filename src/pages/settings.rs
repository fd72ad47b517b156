//! Profile settings page: display name, avatar, dark mode, sign out.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;

fn validate_profile_input(name: &str) -> Result<String, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Display name cannot be empty.");
    }
    Ok(name.to_owned())
}

/// Empty avatar input means "no avatar", not an empty URL.
fn normalize_avatar_input(avatar: &str) -> Option<String> {
    let avatar = avatar.trim();
    if avatar.is_empty() {
        None
    } else {
        Some(avatar.to_owned())
    }
}

/// Settings page — requires an authenticated session.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    crate::util::auth::install_unauth_redirect(auth, use_navigate());

    let name = RwSignal::new(String::new());
    let avatar = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let seeded = RwSignal::new(false);

    // Seed the form once the current user is known.
    Effect::new(move || {
        if seeded.get_untracked() {
            return;
        }
        if let Some(user) = auth.get().user {
            name.set(user.name);
            avatar.set(user.avatar_url.unwrap_or_default());
            seeded.set(true);
        }
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let name_value = match validate_profile_input(&name.get()) {
            Ok(value) => value,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        let avatar_value = normalize_avatar_input(&avatar.get());
        busy.set(true);
        info.set("Saving...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_profile(&name_value, avatar_value.as_deref()).await {
                Ok(user) => {
                    auth.update(|a| a.user = Some(user));
                    info.set("Profile saved.".to_owned());
                }
                Err(e) => info.set(format!("Save failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name_value, avatar_value);
        }
    };

    let on_toggle_dark = move |_| {
        ui.update(|u| u.dark_mode = crate::util::dark_mode::toggle(u.dark_mode));
    };

    let navigate = use_navigate();
    let on_sign_out = move |_| {
        crate::util::auth_token::clear_token();
        auth.update(|a| {
            a.user = None;
            a.loading = false;
        });
        navigate("/login", leptos_router::NavigateOptions::default());
    };

    view! {
        <div class="settings-page">
            <header class="settings-page__header">
                <a class="btn settings-page__back" href="/">
                    "Back to chats"
                </a>
                <h1>"Settings"</h1>
            </header>

            <form class="settings-form" on:submit=on_save>
                <label class="settings-form__label">"Display name"</label>
                <input
                    class="settings-form__input"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />

                <label class="settings-form__label">"Avatar URL"</label>
                <input
                    class="settings-form__input"
                    type="url"
                    placeholder="https://..."
                    prop:value=move || avatar.get()
                    on:input=move |ev| avatar.set(event_target_value(&ev))
                />

                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Save"
                </button>
                <p class="settings-form__info">{move || info.get()}</p>
            </form>

            <div class="settings-page__row">
                <span>"Dark mode"</span>
                <button class="btn" on:click=on_toggle_dark>
                    {move || if ui.get().dark_mode { "On" } else { "Off" }}
                </button>
            </div>

            <div class="settings-page__row">
                <button class="btn btn--danger" on:click=on_sign_out>
                    "Sign out"
                </button>
            </div>
        </div>
    }
}

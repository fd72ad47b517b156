//! Login page with sign-in, create-account, and password-reset forms.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::auth::AuthState;

/// Which of the three auth forms is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum AuthMode {
    #[default]
    SignIn,
    Register,
    Reset,
    ResetConfirm,
}

fn validate_sign_in_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

fn validate_register_input(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(String, String, String), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter a display name.");
    }
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.len() < 8 {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok((name.to_owned(), email.to_owned(), password.to_owned()))
}

fn validate_reset_request_input(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(email.to_owned())
}

fn validate_reset_confirm_input(
    token: &str,
    password: &str,
    confirm: &str,
) -> Result<(String, String), &'static str> {
    let token = token.trim();
    if token.is_empty() {
        return Err("Enter the reset code from your email.");
    }
    if password.len() < 8 {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok((token.to_owned(), password.to_owned()))
}

/// Finish a successful login/registration: persist the token and install the
/// user into auth state.
#[cfg(feature = "hydrate")]
fn complete_auth(auth: RwSignal<AuthState>, resp: crate::net::types::AuthResponse) {
    crate::util::auth_token::store_token(&resp.token);
    auth.update(|a| {
        a.user = Some(resp.user);
        a.loading = false;
    });
}

/// Login page — sign in by default, with toggles for account creation and
/// password reset. A successful sign-in navigates to the chat view.
#[component]
pub fn LoginPage() -> impl IntoView {
    let mode = RwSignal::new(AuthMode::default());
    let name = RwSignal::new(String::new());
    let reset_code = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let auth = expect_context::<RwSignal<AuthState>>();

    let switch_mode = move |next: AuthMode| {
        mode.set(next);
        info.set(String::new());
        password.set(String::new());
        confirm.set(String::new());
        reset_code.set(String::new());
    };

    let on_sign_in = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_sign_in_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(msg) => {
                    info.set(msg.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email_value, &password_value).await {
                Ok(resp) => {
                    complete_auth(auth, resp);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Err(e) => {
                    info.set(format!("Sign in failed: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (name_value, email_value, password_value) = match validate_register_input(
            &name.get(),
            &email.get(),
            &password.get(),
            &confirm.get(),
        ) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&name_value, &email_value, &password_value).await {
                Ok(resp) => {
                    complete_auth(auth, resp);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Err(e) => {
                    info.set(format!("Registration failed: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name_value, email_value, password_value);
        }
    };

    let on_reset = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_reset_request_input(&email.get()) {
            Ok(value) => value,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Requesting reset...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_password_reset(&email_value).await {
                Ok(()) => {
                    switch_mode(AuthMode::ResetConfirm);
                    info.set("Check your email for a reset code, then set a new password.".to_owned());
                }
                Err(e) => info.set(format!("Reset request failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email_value;
        }
    };

    let on_reset_confirm = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (code_value, password_value) = match validate_reset_confirm_input(
            &reset_code.get(),
            &password.get(),
            &confirm.get(),
        ) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Updating password...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::confirm_password_reset(&code_value, &password_value).await {
                Ok(()) => {
                    switch_mode(AuthMode::SignIn);
                    info.set("Password updated. Sign in with your new password.".to_owned());
                }
                Err(e) => info.set(format!("Reset failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (code_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Courier"</h1>
                <p class="login-card__subtitle">
                    {move || match mode.get() {
                        AuthMode::SignIn => "Sign in to continue",
                        AuthMode::Register => "Create your account",
                        AuthMode::Reset => "Reset your password",
                        AuthMode::ResetConfirm => "Choose a new password",
                    }}
                </p>

                <Show when=move || mode.get() == AuthMode::Register>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Display name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </Show>

                <form
                    class="login-form"
                    on:submit=move |ev| match mode.get() {
                        AuthMode::SignIn => on_sign_in(ev),
                        AuthMode::Register => on_register(ev),
                        AuthMode::Reset => on_reset(ev),
                        AuthMode::ResetConfirm => on_reset_confirm(ev),
                    }
                >
                    <Show when=move || mode.get() != AuthMode::ResetConfirm>
                        <input
                            class="login-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </Show>

                    <Show when=move || mode.get() == AuthMode::ResetConfirm>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Reset code"
                            prop:value=move || reset_code.get()
                            on:input=move |ev| reset_code.set(event_target_value(&ev))
                        />
                    </Show>

                    <Show when=move || mode.get() != AuthMode::Reset>
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </Show>

                    <Show when=move || {
                        matches!(mode.get(), AuthMode::Register | AuthMode::ResetConfirm)
                    }>
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Confirm password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </Show>

                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || match mode.get() {
                            AuthMode::SignIn => "Sign In",
                            AuthMode::Register => "Create Account",
                            AuthMode::Reset => "Send Reset Code",
                            AuthMode::ResetConfirm => "Set New Password",
                        }}
                    </button>
                </form>

                <p class="login-card__info">{move || info.get()}</p>

                <div class="login-card__links">
                    <Show when=move || mode.get() != AuthMode::SignIn>
                        <button class="login-link" on:click=move |_| switch_mode(AuthMode::SignIn)>
                            "Back to sign in"
                        </button>
                    </Show>
                    <Show when=move || mode.get() == AuthMode::SignIn>
                        <button class="login-link" on:click=move |_| switch_mode(AuthMode::Register)>
                            "Create an account"
                        </button>
                        <button class="login-link" on:click=move |_| switch_mode(AuthMode::Reset)>
                            "Forgot password?"
                        </button>
                    </Show>
                    <Show when=move || mode.get() == AuthMode::Reset>
                        <button
                            class="login-link"
                            on:click=move |_| switch_mode(AuthMode::ResetConfirm)
                        >
                            "Already have a reset code?"
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}

//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the bearer
//! token from persisted storage attached as an `Authorization` header.
//! Server-side (SSR): stubs returning `None`/error since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth/fetch
//! failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthResponse, ChatMessage, Conversation, User};
#[cfg(feature = "hydrate")]
use serde::Deserialize;

#[cfg(any(test, feature = "hydrate"))]
fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn conversation_messages_endpoint(conversation_id: &str) -> String {
    format!("/api/conversations/{conversation_id}/messages")
}

/// `query` must already be URI-component encoded.
#[cfg(any(test, feature = "hydrate"))]
fn user_search_endpoint(query: &str) -> String {
    format!("/api/users/search?q={query}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn register_failed_message(status: u16) -> String {
    format!("registration failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn reset_failed_message(status: u16) -> String {
    format!("password reset failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn send_failed_message(status: u16) -> String {
    format!("message send failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn profile_update_failed_message(status: u16) -> String {
    format!("profile update failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn conversation_create_failed_message(status: u16) -> String {
    format!("conversation create failed: {status}")
}

#[cfg(feature = "hydrate")]
fn with_auth(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::auth_token::read_token() {
        Some(token) => builder.header("Authorization", &bearer_value(&token)),
        None => builder,
    }
}

/// Sign in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the credentials are
/// rejected.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        resp.json::<AuthResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server rejects
/// the registration.
pub async fn register(name: &str, email: &str, password: &str) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name, "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/register")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(register_failed_message(resp.status()));
        }
        resp.json::<AuthResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err("not available on server".to_owned())
    }
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct OkResponse {
    ok: bool,
}

/// Request a password-reset email via `POST /api/auth/password-reset/request`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn request_password_reset(email: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        let resp = gloo_net::http::Request::post("/api/auth/password-reset/request")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(reset_failed_message(resp.status()));
        }
        let body: OkResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.ok {
            return Err("password reset failed".to_owned());
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err("not available on server".to_owned())
    }
}

/// Set a new password via `POST /api/auth/password-reset/confirm`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the reset token is
/// rejected.
pub async fn confirm_password_reset(token: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "token": token, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/password-reset/confirm")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(reset_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get("/api/auth/me"))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the conversation list from `/api/conversations`.
/// Returns `None` on transport or decode failure.
pub async fn fetch_conversations() -> Option<Vec<Conversation>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get("/api/conversations"))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Conversation>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch message history for one conversation.
/// Returns `None` on transport or decode failure.
pub async fn fetch_messages(conversation_id: &str) -> Option<Vec<ChatMessage>> {
    #[cfg(feature = "hydrate")]
    {
        let url = conversation_messages_endpoint(conversation_id);
        let resp = with_auth(gloo_net::http::Request::get(&url)).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<ChatMessage>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = conversation_id;
        None
    }
}

/// Create (or fetch the existing) direct conversation with another user via
/// `POST /api/conversations`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn create_conversation(participant_id: &str) -> Result<Conversation, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "participant_id": participant_id });
        let resp = with_auth(gloo_net::http::Request::post("/api/conversations"))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(conversation_create_failed_message(resp.status()));
        }
        resp.json::<Conversation>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = participant_id;
        Err("not available on server".to_owned())
    }
}

/// HTTP creation path for a message via `POST /api/messages`, used when the
/// realtime channel is down.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn send_message(to: &str, content: &str) -> Result<ChatMessage, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "to": to, "content": content });
        let resp = with_auth(gloo_net::http::Request::post("/api/messages"))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(send_failed_message(resp.status()));
        }
        resp.json::<ChatMessage>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (to, content);
        Err("not available on server".to_owned())
    }
}

/// Search users by name or email via `GET /api/users/search`.
/// Returns `None` on transport or decode failure.
pub async fn search_users(query: &str) -> Option<Vec<User>> {
    #[cfg(feature = "hydrate")]
    {
        let encoded = String::from(js_sys::encode_uri_component(query));
        let url = user_search_endpoint(&encoded);
        let resp = with_auth(gloo_net::http::Request::get(&url)).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<User>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        None
    }
}

/// Update the signed-in user's profile via `PUT /api/users/me`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn update_profile(name: &str, avatar_url: Option<&str>) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name, "avatar_url": avatar_url });
        let resp = with_auth(gloo_net::http::Request::put("/api/users/me"))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(profile_update_failed_message(resp.status()));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, avatar_url);
        Err("not available on server".to_owned())
    }
}

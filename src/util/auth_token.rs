//! Bearer token persistence.
//!
//! The REST layer and the realtime channel both read the token from
//! `localStorage`; login/register write it and sign-out clears it. Requires
//! a browser environment; on the server every read comes back empty.

#[cfg(test)]
#[path = "auth_token_test.rs"]
mod auth_token_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "courier_token";

/// Treat blank storage values as no token at all.
#[cfg(any(test, feature = "hydrate"))]
fn normalize_stored_token(raw: Option<String>) -> Option<String> {
    match raw {
        Some(t) if !t.trim().is_empty() => Some(t),
        _ => None,
    }
}

/// Read the persisted bearer token, if any.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        normalize_stored_token(storage.get_item(STORAGE_KEY).ok()?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a bearer token for subsequent sessions.
pub fn store_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the persisted bearer token on sign-out.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Id of the signed-in user, if any.
    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }
}

//! Authenticated-user state
//!
//! Holds the user every transaction is sent on behalf of. An empty session
//! makes every operation fail locally before any request is sent.

use std::sync::{PoisonError, RwLock};

use serde_json::Value;
use shared::User;

#[derive(Debug, Default)]
pub struct Session {
    user: RwLock<Option<User>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(user: User) -> Self {
        Self {
            user: RwLock::new(Some(user)),
        }
    }

    /// Store the logged-in user
    pub fn sign_in(&self, user: User) {
        tracing::info!(user_id = user.id, "Session started");
        *self.user.write().unwrap_or_else(PoisonError::into_inner) = Some(user);
    }

    /// Store the user from a backend login payload
    ///
    /// Returns `false` (and leaves the session empty) when the payload has
    /// no usable `id`.
    pub fn sign_in_from_value(&self, value: &Value) -> bool {
        match serde_json::from_value::<User>(value.clone()) {
            Ok(user) => {
                self.sign_in(user);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Login payload has no usable user id");
                self.sign_out();
                false
            }
        }
    }

    pub fn sign_out(&self) {
        *self.user.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn current_user(&self) -> Option<User> {
        self.user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }
}

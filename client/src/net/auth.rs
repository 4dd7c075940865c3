//! Auth gateway: login, signup, and stored-token validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page drives all three operations. Each is a single attempt; the
//! only state they touch is the session store, and failures come back as the
//! message the page should display.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::api::AuthApi;
use super::types::{LoginRequest, SignupRequest};
use crate::state::session::{Session, SessionStore};
use crate::util::validate;

/// Fallback when the backend gives no usable error message.
pub const GENERIC_FAILURE: &str = "An error occurred.";

pub struct AuthGateway<'a, A: AuthApi + ?Sized> {
    api: &'a A,
    store: &'a SessionStore,
}

impl<'a, A: AuthApi + ?Sized> AuthGateway<'a, A> {
    pub fn new(api: &'a A, store: &'a SessionStore) -> Self {
        Self { api, store }
    }

    /// Log in and persist the session. The session store is untouched on
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns the message to show: a local validation message, the
    /// backend's `message`, or [`GENERIC_FAILURE`].
    pub async fn login(&self, request: &LoginRequest) -> Result<Session, String> {
        validate::check_email(&request.email).map_err(str::to_owned)?;
        match self.api.login(request).await {
            Ok(resp) => {
                let session = Session { token: resp.token, user: resp.user };
                self.store.set(&session);
                leptos::logging::log!("login ok: user={} role={}", session.user.id, session.role().label());
                Ok(session)
            }
            Err(e) => {
                leptos::logging::warn!("login failed: {e}");
                Err(e.server_message().unwrap_or(GENERIC_FAILURE).to_owned())
            }
        }
    }

    /// Register a new account. Does not sign the user in.
    ///
    /// # Errors
    ///
    /// Returns the message to show. Invalid email or contact number is
    /// rejected before any request is sent.
    pub async fn signup(&self, request: &SignupRequest) -> Result<(), String> {
        validate::check_email(&request.email).map_err(str::to_owned)?;
        validate::check_contact_number(&request.contact_number).map_err(str::to_owned)?;
        self.api.signup(request).await.map_err(|e| {
            leptos::logging::warn!("signup failed: {e}");
            e.server_message().unwrap_or(GENERIC_FAILURE).to_owned()
        })
    }

    /// Check a previously stored token with the backend.
    ///
    /// Returns `true` when the stored session is still accepted. Any rejection
    /// or transport failure clears the session without surfacing an error.
    pub async fn validate_existing_token(&self) -> bool {
        let Some(token) = self.store.token() else {
            return false;
        };
        match self.api.validate(&token).await {
            Ok(true) => true,
            Ok(false) => {
                leptos::logging::log!("stored token not accepted");
                self.store.clear();
                false
            }
            Err(e) => {
                leptos::logging::log!("stored token rejected: {e}");
                self.store.clear();
                false
            }
        }
    }
}

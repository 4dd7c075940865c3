//! Persisted auth session (token + user profile).
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page writes the session, route guards and the dashboard read it,
//! and the shared failure resolver clears it when the backend rejects the
//! token. Storage sits behind `SessionBackend` so the same store runs against
//! `localStorage` in the browser and an in-memory map in tests and SSR.
//!
//! INVARIANT
//! =========
//! Token and user are both present or both absent. A half-written or
//! unparseable pair reads back as no session and is wiped.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use leptos::prelude::*;

use crate::net::types::{Role, SessionUser};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Authenticated user's token and profile.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

impl Session {
    pub fn role(&self) -> Role {
        self.user.role
    }

    pub fn is_admin(&self) -> bool {
        match self.user.role {
            Role::Admin => true,
            Role::User => false,
        }
    }
}

/// Key/value persistence used by [`SessionStore`].
pub trait SessionBackend: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory backend for tests and server rendering.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl SessionBackend for MemoryBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// Browser `localStorage` backend. Storage errors are swallowed; a failed
/// write simply reads back as no session.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageBackend;

#[cfg(feature = "hydrate")]
impl LocalStorageBackend {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl SessionBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Read/write surface over the persisted session.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn SessionBackend>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(backend: Arc<dyn SessionBackend>) -> Self {
        Self { backend }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::default()))
    }

    /// `localStorage` in the browser, memory everywhere else.
    pub fn browser() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::new(Arc::new(LocalStorageBackend))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::in_memory()
        }
    }

    /// Persist token and user together.
    pub fn set(&self, session: &Session) {
        let Ok(user) = serde_json::to_string(&session.user) else {
            leptos::logging::warn!("session user failed to serialize; not persisting");
            return;
        };
        self.backend.write(TOKEN_KEY, &session.token);
        self.backend.write(USER_KEY, &user);
    }

    pub fn get(&self) -> Option<Session> {
        let token = self.backend.read(TOKEN_KEY);
        let user = self.backend.read(USER_KEY);
        match (token, user) {
            (None, None) => None,
            (Some(token), Some(raw)) if !token.is_empty() => match serde_json::from_str::<SessionUser>(&raw) {
                Ok(user) => Some(Session { token, user }),
                Err(e) => {
                    leptos::logging::warn!("stored session user unreadable: {e}");
                    self.clear();
                    None
                }
            },
            _ => {
                self.clear();
                None
            }
        }
    }

    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
    }

    pub fn token(&self) -> Option<String> {
        self.get().map(|s| s.token)
    }

    pub fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.get().is_some_and(|s| s.user.role == role)
    }
}

/// Reactive session handle provided through Leptos context.
///
/// `current` mirrors the store so guarded views re-render on login/logout.
/// `ready` stays false until the browser has read storage; server renders and
/// the first hydration pass therefore agree on a pending state.
#[derive(Clone, Debug)]
pub struct SessionContext {
    store: SessionStore,
    current: RwSignal<Option<Session>>,
    ready: RwSignal<bool>,
}

impl SessionContext {
    pub fn new(store: SessionStore) -> Self {
        Self { store, current: RwSignal::new(None), ready: RwSignal::new(false) }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Read storage into the signal and mark the session as known.
    pub fn load(&self) {
        self.sync();
        self.ready.set(true);
    }

    /// Refresh the signal after the store was written elsewhere.
    pub fn sync(&self) {
        self.current.set(self.store.get());
    }

    pub fn clear(&self) {
        self.store.clear();
        self.current.set(None);
    }

    pub fn current(&self) -> Option<Session> {
        self.current.get()
    }

    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }
}

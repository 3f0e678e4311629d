//! Session marker in client-side storage.
//!
//! The login flow (elsewhere) writes three flat entries. This module only
//! checks for the access token and deletes all three on logout. Token
//! contents are never parsed: an empty string still counts as logged in.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::consts::{ACCESS_TOKEN_KEY, SESSION_KEYS};
use crate::error::NavError;

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Synchronous string key-value storage, i.e. `localStorage`.
pub trait SessionStore {
    /// Read `key`. `Ok(None)` means absent.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Storage`] or [`NavError::StorageUnavailable`] if
    /// the backing store throws or cannot be opened.
    fn get(&self, key: &str) -> Result<Option<String>, NavError>;

    /// Delete `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Same as [`SessionStore::get`].
    fn remove(&self, key: &str) -> Result<(), NavError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn,
}

impl SessionState {
    /// Derive state from token presence.
    ///
    /// # Errors
    ///
    /// Propagates the store's error when the token cannot be read.
    pub fn detect<S: SessionStore + ?Sized>(store: &S) -> Result<Self, NavError> {
        Ok(match store.get(ACCESS_TOKEN_KEY)? {
            Some(_) => Self::LoggedIn,
            None => Self::LoggedOut,
        })
    }

    pub fn is_logged_in(self) -> bool {
        self == Self::LoggedIn
    }
}

/// Remove every session key, continuing past failures.
///
/// Returns the errors for the keys that could not be removed, in key order.
pub fn clear<S: SessionStore + ?Sized>(store: &S) -> Vec<NavError> {
    SESSION_KEYS
        .iter()
        .filter_map(|key| store.remove(key).err())
        .collect()
}

/// In-memory [`SessionStore`] test double.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    pub fn keys(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, NavError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn remove(&self, key: &str) -> Result<(), NavError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

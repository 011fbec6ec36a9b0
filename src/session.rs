//! Session Context
//!
//! Owns the persisted session token. Authentication is derived from the
//! presence of a non-empty token, nothing more: no expiry, no refresh.

use crate::error::ApiError;

/// Durable key-value slot holding the session token
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), ApiError>;
    fn clear(&self) -> Result<(), ApiError>;
}

/// Token slot backed by `window.localStorage`
#[derive(Debug, Clone)]
pub struct LocalTokenStore {
    key: String,
}

impl LocalTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(&self.key).ok()?
    }

    fn save(&self, token: &str) -> Result<(), ApiError> {
        let storage = Self::storage().ok_or_else(|| ApiError::Storage("local storage is unavailable".to_string()))?;
        storage
            .set_item(&self.key, token)
            .map_err(|_| ApiError::Storage(format!("failed to persist `{}`", self.key)))
    }

    fn clear(&self) -> Result<(), ApiError> {
        let storage = Self::storage().ok_or_else(|| ApiError::Storage("local storage is unavailable".to_string()))?;
        storage
            .remove_item(&self.key)
            .map_err(|_| ApiError::Storage(format!("failed to remove `{}`", self.key)))
    }
}

#[derive(Debug, Clone)]
pub struct Session<S> {
    store: S,
}

impl<S: TokenStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored token, if any non-empty one exists
    pub fn token(&self) -> Option<String> {
        self.store.load().filter(|token| !token.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn begin(&self, token: &str) -> Result<(), ApiError> {
        self.store.save(token)
    }

    pub fn end(&self) -> Result<(), ApiError> {
        self.store.clear()
    }
}

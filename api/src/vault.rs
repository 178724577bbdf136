//! Token vault trait.
//!
//! The vault abstracts the secure on-device key-value store that holds the
//! session tokens and the cached user record. The client reads the access
//! token from the vault on every protected request; the session reducer
//! writes tokens after OTP verification and clears them on sign-out.
//!
//! Platform implementations (keychain, keystore) live with the embedding
//! application; [`MemoryTokenVault`] backs tests and development.

use crate::error::ApiError;
use futures::future::BoxFuture;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Storage key for the access token.
pub const ACCESS_TOKEN_KEY: &str = "auth_access_token";

/// Storage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "auth_refresh_token";

/// Storage key for the cached user JSON.
pub const USER_KEY: &str = "auth_user";

/// Secure key-value storage for session credentials.
///
/// Get/set/remove are the only operations consumed. The trait is object-safe
/// (boxed futures) so the client can hold `Arc<dyn TokenVault>` without
/// threading a type parameter through every call site.
pub trait TokenVault: Send + Sync {
    /// Read a value by key.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Vault`] if the underlying storage fails.
    fn get(&self, key: &str) -> BoxFuture<'_, Result<Option<String>, ApiError>>;

    /// Write a value.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Vault`] if the underlying storage fails.
    fn set(&self, key: &str, value: String) -> BoxFuture<'_, Result<(), ApiError>>;

    /// Remove a value.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Vault`] if the underlying storage fails.
    fn remove(&self, key: &str) -> BoxFuture<'_, Result<(), ApiError>>;
}

/// In-memory vault for tests and development.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenVault {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryTokenVault {
    /// Create an empty vault.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a vault pre-populated with an access token.
    #[must_use]
    pub fn with_access_token(token: impl Into<String>) -> Self {
        let vault = Self::new();
        if let Ok(mut entries) = vault.entries.lock() {
            entries.insert(ACCESS_TOKEN_KEY.to_string(), token.into());
        }
        vault
    }
}

impl TokenVault for MemoryTokenVault {
    fn get(&self, key: &str) -> BoxFuture<'_, Result<Option<String>, ApiError>> {
        let entries = Arc::clone(&self.entries);
        let key = key.to_string();
        Box::pin(async move {
            let guard = entries
                .lock()
                .map_err(|_| ApiError::Vault("vault lock poisoned".to_string()))?;
            Ok(guard.get(&key).cloned())
        })
    }

    fn set(&self, key: &str, value: String) -> BoxFuture<'_, Result<(), ApiError>> {
        let entries = Arc::clone(&self.entries);
        let key = key.to_string();
        Box::pin(async move {
            let mut guard = entries
                .lock()
                .map_err(|_| ApiError::Vault("vault lock poisoned".to_string()))?;
            guard.insert(key, value);
            Ok(())
        })
    }

    fn remove(&self, key: &str) -> BoxFuture<'_, Result<(), ApiError>> {
        let entries = Arc::clone(&self.entries);
        let key = key.to_string();
        Box::pin(async move {
            let mut guard = entries
                .lock()
                .map_err(|_| ApiError::Vault("vault lock poisoned".to_string()))?;
            guard.remove(&key);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn vault_round_trip() {
        let vault = MemoryTokenVault::new();
        assert!(matches!(vault.get(ACCESS_TOKEN_KEY).await, Ok(None)));

        let set = vault.set(ACCESS_TOKEN_KEY, "tok_1".to_string()).await;
        assert!(set.is_ok());
        assert!(matches!(vault.get(ACCESS_TOKEN_KEY).await, Ok(Some(ref t)) if t == "tok_1"));

        let removed = vault.remove(ACCESS_TOKEN_KEY).await;
        assert!(removed.is_ok());
        assert!(matches!(vault.get(ACCESS_TOKEN_KEY).await, Ok(None)));
    }
}

/******************************************************************************
   Author: Taggy Contributors
   Date: 18/10/26
******************************************************************************/

//! Token retrieval for authenticated requests
//!
//! The client never stores credentials itself. Every request asks a
//! [`TokenProvider`] for the current bearer token. Two providers ship with the
//! crate:
//! - [`FnTokenProvider`], wrapping a user supplied async closure
//! - [`StorageTokenProvider`], reading the token the login flow left in the
//!   application's local storage under [`TOKEN_STORAGE_KEY`]
//!
//! # Example
//! ```ignore
//! use taggy::auth::token_fn;
//!
//! let provider = token_fn(|| async { Ok("custom_token_example".to_string()) });
//! ```

use crate::constants::TOKEN_STORAGE_KEY;
use crate::error::AppError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// Source of the bearer token attached to outgoing requests
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Returns the token to send. An empty string means "no token".
    async fn get_token(&self) -> Result<String, AppError>;
}

/// Adapts an async closure into a [`TokenProvider`]
pub struct FnTokenProvider<F> {
    f: F,
}

impl<F> FnTokenProvider<F> {
    /// Wraps `f`
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> fmt::Debug for FnTokenProvider<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTokenProvider").finish_non_exhaustive()
    }
}

#[async_trait]
impl<F, Fut> TokenProvider for FnTokenProvider<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<String, AppError>> + Send + 'static,
{
    async fn get_token(&self) -> Result<String, AppError> {
        (self.f)().await
    }
}

/// Shorthand for `Arc::new(FnTokenProvider::new(f))`
pub fn token_fn<F, Fut>(f: F) -> Arc<dyn TokenProvider>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<String, AppError>> + Send + 'static,
{
    Arc::new(FnTokenProvider::new(f))
}

/// Persistent key/value storage local to the running application
pub trait TokenStore: Send + Sync {
    /// Reads the value stored under `key`
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError>;
}

/// In-memory [`TokenStore`]
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryTokenStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any previous value
    pub fn set_item(&self, key: &str, value: &str) {
        let mut items = self
            .items
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        items.insert(key.to_string(), value.to_string());
    }

    /// Removes the value stored under `key`
    pub fn remove_item(&self, key: &str) {
        let mut items = self
            .items
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        items.remove(key);
    }
}

impl TokenStore for MemoryTokenStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        let items = self
            .items
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(items.get(key).cloned())
    }
}

/// [`TokenStore`] backed by a flat JSON object on disk
///
/// A missing file reads as an empty store.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Uses the JSON file at `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl TokenStore for FileTokenStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let items: HashMap<String, String> = serde_json::from_str(&raw)?;
        Ok(items.get(key).cloned())
    }
}

/// Default provider: reads the token from local storage
pub struct StorageTokenProvider {
    store: Arc<dyn TokenStore>,
    key: String,
}

impl StorageTokenProvider {
    /// Reads from `store` under [`TOKEN_STORAGE_KEY`]
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self::with_key(store, TOKEN_STORAGE_KEY)
    }

    /// Reads from `store` under a custom key
    pub fn with_key(store: Arc<dyn TokenStore>, key: &str) -> Self {
        Self {
            store,
            key: key.to_string(),
        }
    }

    /// Storage key this provider reads
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Debug for StorageTokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageTokenProvider")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl TokenProvider for StorageTokenProvider {
    async fn get_token(&self) -> Result<String, AppError> {
        match self.store.get_item(&self.key) {
            Ok(Some(token)) => Ok(token),
            Ok(None) => {
                debug!("No token stored under {}", self.key);
                Ok(String::new())
            }
            Err(e) => {
                warn!("Failed to read {} from local storage: {e}", self.key);
                Ok(String::new())
            }
        }
    }
}

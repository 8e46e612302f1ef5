/******************************************************************************
   Author: Taggy Contributors
   Date: 18/10/26
******************************************************************************/

//! Application-wide registry of shared singletons
//!
//! Plugins publish values once while the application boots; components read
//! them afterwards. Values are stored as `Arc<T>` and handed back as clones of
//! the same `Arc`, so every reader observes the same instance.

use crate::error::AppError;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

type Entry = Arc<dyn Any + Send + Sync>;

/// String-keyed store of shared instances
///
/// Single writer at boot, many readers afterwards. A key can be provided only
/// once.
#[derive(Default)]
pub struct Registry {
    entries: RwLock<HashMap<String, Entry>>,
}

impl Registry {
    /// Creates an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes `value` under `key`
    ///
    /// # Errors
    /// [`AppError::RegistryKeyTaken`] if `key` was already provided.
    pub fn provide<T: Any + Send + Sync>(&self, key: &str, value: Arc<T>) -> Result<(), AppError> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.contains_key(key) {
            return Err(AppError::RegistryKeyTaken(key.to_string()));
        }
        debug!("Registry: providing {}", key);
        entries.insert(key.to_string(), value);
        Ok(())
    }

    /// Reads the value published under `key`
    ///
    /// # Errors
    /// [`AppError::RegistryKeyNotFound`] if nothing was provided under `key`,
    /// [`AppError::RegistryTypeMismatch`] if the value is not a `T`.
    pub fn get<T: Any + Send + Sync>(&self, key: &str) -> Result<Arc<T>, AppError> {
        let entry = {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            entries
                .get(key)
                .cloned()
                .ok_or_else(|| AppError::RegistryKeyNotFound(key.to_string()))?
        };
        entry
            .downcast::<T>()
            .map_err(|_| AppError::RegistryTypeMismatch(key.to_string()))
    }

    /// True if something was provided under `key`
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.contains_key(key)
    }

    /// Provided keys, sorted
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let mut keys: Vec<String> = entries.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("keys", &self.keys())
            .finish()
    }
}

//! String key/value persistence for client-side state.
//!
//! Stores hold JSON documents under fixed keys (`cart`, `branding_templates`).
//! There is no versioning and no cross-process locking: the last write wins.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Failed to read key '{key}': {message}")]
    Read { key: String, message: String },

    #[error("Failed to write key '{key}': {message}")]
    Write { key: String, message: String },

    #[error("Invalid storage key: '{0}'")]
    InvalidKey(String),
}

pub trait KeyValueStore: Send + Sync + Debug {
    /// Returns `Ok(None)` when nothing is stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&self, key: &str) -> Result<(), StoreError>;

    fn name(&self) -> &'static str;
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::Read {
            key: key.to_string(),
            message: "store lock poisoned".to_string(),
        })?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Write {
            key: key.to_string(),
            message: "store lock poisoned".to_string(),
        })?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Write {
            key: key.to_string(),
            message: "store lock poisoned".to_string(),
        })?;
        entries.remove(key);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "InMemoryStore"
    }
}

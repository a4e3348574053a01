//! Persistence backends
//!
//! The stores in this crate persist themselves through the narrow
//! [`KeyValueStore`] port: string keys mapping to string values. Two
//! adapters are provided:
//!
//! - [`SledStore`]: durable storage in an embedded sled database
//! - [`MemoryStore`]: process-local storage for tests and ephemeral sessions

pub mod error;
pub mod memory;
pub mod sled_store;

pub use error::StorageError;
pub use memory::MemoryStore;
pub use sled_store::SledStore;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Textual key-value persistence port
///
/// Implementations must round-trip values exactly: `get` after `set`
/// returns the same string.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`; deleting a missing key is not an error
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Load a JSON-encoded list stored under `key`
///
/// A missing key, an unreadable backend or a corrupt value all yield an
/// empty list; the latter two are logged.
pub fn load_list<T: DeserializeOwned>(backend: &dyn KeyValueStore, key: &str) -> Vec<T> {
    match backend.get(key) {
        Ok(Some(text)) => serde_json::from_str(&text).unwrap_or_else(|e| {
            log::warn!("Discarding corrupt data under '{key}': {e}");
            Vec::new()
        }),
        Ok(None) => Vec::new(),
        Err(e) => {
            log::warn!("Could not read '{key}', starting empty: {e}");
            Vec::new()
        }
    }
}

/// Persist `items` as a JSON list under `key`
///
/// Failures are logged and reported through the return value, never raised.
pub fn save_list<T: Serialize>(backend: &dyn KeyValueStore, key: &str, items: &[T]) -> bool {
    let result = serde_json::to_string(items)
        .map_err(StorageError::from)
        .and_then(|text| backend.set(key, &text));

    match result {
        Ok(()) => {
            log::debug!("Saved {} item(s) under '{key}'", items.len());
            true
        }
        Err(e) => {
            log::error!("Failed to save '{key}', change kept in memory only: {e}");
            false
        }
    }
}

/// Delete the list stored under `key`, logging failures
pub fn remove_list(backend: &dyn KeyValueStore, key: &str) -> bool {
    match backend.remove(key) {
        Ok(()) => true,
        Err(e) => {
            log::error!("Failed to remove '{key}': {e}");
            false
        }
    }
}

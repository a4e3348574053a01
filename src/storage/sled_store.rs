//! Sled-backed key-value store
//!
//! Values live in a dedicated `kv` tree of the sled database. Every write is
//! flushed before returning so the in-memory view of a store never runs
//! ahead of what is on disk.

use super::{KeyValueStore, StorageError};
use sled::{Db, Tree};
use std::path::Path;

const TREE_NAME: &str = "kv";

/// Durable key-value store on top of sled
pub struct SledStore {
    db: Db,
    tree: Tree,
}

impl SledStore {
    /// Opens or creates a database at the specified path
    ///
    /// # Examples
    /// ```no_run
    /// use nearby::storage::SledStore;
    /// let store = SledStore::open("nearby_db").unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the database or its tree cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let db = sled::open(path)?;
        let tree = db.open_tree(TREE_NAME)?;
        Ok(Self { db, tree })
    }

    /// Open a throwaway database that is deleted when dropped
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the temporary database cannot be created.
    pub fn temporary() -> Result<Self, StorageError> {
        let db = sled::Config::new().temporary(true).open()?;
        let tree = db.open_tree(TREE_NAME)?;
        Ok(Self { db, tree })
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Flush all pending writes to disk
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the flush operation fails.
    pub fn flush(&self) -> Result<(), StorageError> {
        self.db.flush()?;
        Ok(())
    }
}

impl KeyValueStore for SledStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.tree.get(key.as_bytes())? {
            Some(value) => String::from_utf8(value.to_vec())
                .map(Some)
                .map_err(|_| StorageError::InvalidText(key.to_string())),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.tree.insert(key.as_bytes(), value.as_bytes())?;
        self.tree.flush()?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.tree.remove(key.as_bytes())?;
        self.tree.flush()?;
        Ok(())
    }
}

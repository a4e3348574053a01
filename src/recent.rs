//! Bounded most-recent-first history
//!
//! One algorithm serves both recent locations and recent search terms:
//! recording a label moves it to the front (dropping any older entry with the
//! same label) and the list is truncated to a fixed capacity.

use crate::geo::Coordinate;
use crate::location::{LocationError, LocationSource};
use crate::storage::{self, KeyValueStore};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Backend key for recent locations
pub const RECENT_LOCATIONS_KEY: &str = "recent_locations";
/// Backend key for recent search terms
pub const RECENT_SEARCHES_KEY: &str = "recent_searches";
/// Default number of recent locations kept
pub const DEFAULT_LOCATION_CAPACITY: usize = 5;
/// Default number of recent search terms kept
pub const DEFAULT_SEARCH_CAPACITY: usize = 10;

/// An entry identified by its label
pub trait Labeled {
    fn label(&self) -> &str;
}

impl Labeled for String {
    fn label(&self) -> &str {
        self
    }
}

/// A named location the user searched for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentEntry {
    pub label: String,
    pub location: Coordinate,
}

impl Labeled for RecentEntry {
    fn label(&self) -> &str {
        &self.label
    }
}

/// Persistent, capacity-bounded, most-recent-first list of unique labels
pub struct RecentEntriesStore<E> {
    backend: Arc<dyn KeyValueStore>,
    key: String,
    capacity: usize,
    entries: Mutex<Vec<E>>,
}

/// Recent locations with their coordinates
pub type RecentLocations = RecentEntriesStore<RecentEntry>;
/// Recent free-text search terms
pub type RecentSearches = RecentEntriesStore<String>;

impl<E> RecentEntriesStore<E>
where
    E: Labeled + Clone + Serialize + DeserializeOwned,
{
    /// Load entries stored under `key`, keeping at most `capacity`
    ///
    /// Unreadable or corrupt data yields an empty list.
    #[must_use]
    pub fn load(backend: Arc<dyn KeyValueStore>, key: &str, capacity: usize) -> Self {
        let mut entries: Vec<E> = storage::load_list(backend.as_ref(), key);

        let mut seen = std::collections::HashSet::new();
        entries.retain(|e| seen.insert(e.label().to_string()));
        entries.truncate(capacity);

        Self {
            backend,
            key: key.to_string(),
            capacity,
            entries: Mutex::new(entries),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<E>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Put `entry` at the front, dropping an older entry with the same label
    ///
    /// Blank labels are ignored. Returns the list after the operation.
    pub fn push(&self, entry: E) -> Vec<E> {
        let mut entries = self.lock();
        if entry.label().trim().is_empty() {
            return entries.clone();
        }

        entries.retain(|e| e.label() != entry.label());
        entries.insert(0, entry);
        entries.truncate(self.capacity);

        storage::save_list(self.backend.as_ref(), &self.key, &entries);
        entries.clone()
    }

    /// Entries, most recent first
    #[must_use]
    pub fn list(&self) -> Vec<E> {
        self.lock().clone()
    }

    /// Find the entry with `label`
    #[must_use]
    pub fn get(&self, label: &str) -> Option<E> {
        self.lock().iter().find(|e| e.label() == label).cloned()
    }

    /// Remove every entry and the persisted key
    pub fn clear(&self) {
        self.lock().clear();
        storage::remove_list(self.backend.as_ref(), &self.key);
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl RecentEntriesStore<RecentEntry> {
    /// Recent locations under [`RECENT_LOCATIONS_KEY`]
    #[must_use]
    pub fn locations(backend: Arc<dyn KeyValueStore>, capacity: usize) -> Self {
        Self::load(backend, RECENT_LOCATIONS_KEY, capacity)
    }

    /// Record a visit to `location` under `label`
    pub fn record(&self, label: impl Into<String>, location: Coordinate) -> Vec<RecentEntry> {
        self.push(RecentEntry {
            label: label.into(),
            location,
        })
    }
}

/// The most recently used location stands in for the current position
impl LocationSource for RecentEntriesStore<RecentEntry> {
    fn current_position(&self) -> Result<Coordinate, LocationError> {
        self.lock()
            .first()
            .map(|entry| entry.location)
            .ok_or_else(|| LocationError::Unavailable("no saved locations".into()))
    }
}

impl RecentEntriesStore<String> {
    /// Recent search terms under [`RECENT_SEARCHES_KEY`]
    #[must_use]
    pub fn searches(backend: Arc<dyn KeyValueStore>, capacity: usize) -> Self {
        Self::load(backend, RECENT_SEARCHES_KEY, capacity)
    }

    /// Record a search term
    pub fn record(&self, term: impl Into<String>) -> Vec<String> {
        self.push(term.into())
    }

    /// Stored terms containing `input` (case-insensitive), at most `limit`
    #[must_use]
    pub fn suggestions(&self, input: &str, limit: usize) -> Vec<String> {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.lock()
            .iter()
            .filter(|term| term.to_lowercase().contains(&needle))
            .take(limit)
            .cloned()
            .collect()
    }
}

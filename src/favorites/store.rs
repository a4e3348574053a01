//! The favorites store

use super::types::FavoriteRecord;
use crate::places::Place;
use crate::storage::{self, KeyValueStore};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Backend key owned by the favorites store
pub const FAVORITES_KEY: &str = "nearby_favorites";

/// Persistent set of favorited places, at most one record per place id
///
/// Every mutation updates the in-memory list and writes it through to the
/// backend before returning. Backend failures never reach the caller: a
/// failed load starts the store empty and a failed write keeps the change in
/// memory only. Both are logged.
///
/// Mutations take a single lock around the read-modify-write, so a store
/// shared between threads serializes concurrent `add`/`remove`/`toggle`.
pub struct FavoritesStore {
    backend: Arc<dyn KeyValueStore>,
    key: String,
    records: Mutex<Vec<FavoriteRecord>>,
}

impl FavoritesStore {
    /// Load favorites from `backend` under [`FAVORITES_KEY`]
    #[must_use]
    pub fn load(backend: Arc<dyn KeyValueStore>) -> Self {
        Self::load_with_key(backend, FAVORITES_KEY)
    }

    /// Load favorites stored under a custom key
    #[must_use]
    pub fn load_with_key(backend: Arc<dyn KeyValueStore>, key: &str) -> Self {
        let mut records: Vec<FavoriteRecord> = storage::load_list(backend.as_ref(), key);

        // Keep the first snapshot if hand-edited data holds duplicates
        let before = records.len();
        let mut seen = std::collections::HashSet::new();
        records.retain(|r| seen.insert(r.place_id.clone()));
        if records.len() != before {
            log::warn!("Dropped {} duplicate favorite(s)", before - records.len());
        }

        log::debug!("Loaded {} favorite(s)", records.len());

        Self {
            backend,
            key: key.to_string(),
            records: Mutex::new(records),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<FavoriteRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, records: &[FavoriteRecord]) {
        storage::save_list(self.backend.as_ref(), &self.key, records);
    }

    /// Favorite `place` unless it already is; the existing snapshot is kept
    ///
    /// Returns the full favorites list after the operation.
    pub fn add(&self, place: &Place) -> Vec<FavoriteRecord> {
        let mut records = self.lock();
        if !records.iter().any(|r| r.place_id == place.id) {
            records.push(FavoriteRecord::from_place(place));
            self.persist(&records);
        }
        records.clone()
    }

    /// Remove the favorite for `place_id`; a missing id is a no-op
    ///
    /// Returns the full favorites list after the operation.
    pub fn remove(&self, place_id: &str) -> Vec<FavoriteRecord> {
        let mut records = self.lock();
        let before = records.len();
        records.retain(|r| r.place_id != place_id);
        if records.len() != before {
            self.persist(&records);
        }
        records.clone()
    }

    /// Remove `place` if favorited, otherwise add it
    ///
    /// Returns the full favorites list after the operation.
    pub fn toggle(&self, place: &Place) -> Vec<FavoriteRecord> {
        let mut records = self.lock();
        if let Some(pos) = records.iter().position(|r| r.place_id == place.id) {
            records.remove(pos);
        } else {
            records.push(FavoriteRecord::from_place(place));
        }
        self.persist(&records);
        records.clone()
    }

    /// Whether `place_id` is favorited
    #[must_use]
    pub fn is_favorite(&self, place_id: &str) -> bool {
        self.lock().iter().any(|r| r.place_id == place_id)
    }

    /// Get the record for `place_id`
    #[must_use]
    pub fn get(&self, place_id: &str) -> Option<FavoriteRecord> {
        self.lock().iter().find(|r| r.place_id == place_id).cloned()
    }

    /// All favorites in insertion order
    #[must_use]
    pub fn list(&self) -> Vec<FavoriteRecord> {
        self.lock().clone()
    }

    /// Remove every favorite and the persisted key
    pub fn clear(&self) -> Vec<FavoriteRecord> {
        let mut records = self.lock();
        records.clear();
        storage::remove_list(self.backend.as_ref(), &self.key);
        Vec::new()
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::testing::{FailingStore, coord, place};
    use std::thread;

    fn memory_store() -> (Arc<MemoryStore>, FavoritesStore) {
        let backend = Arc::new(MemoryStore::new());
        let store = FavoritesStore::load(backend.clone());
        (backend, store)
    }

    #[test]
    fn test_add_is_idempotent_and_keeps_first_snapshot() {
        let (_, store) = memory_store();
        let original = place("p1", coord(1.0, 1.0)).with_rating(4.0, 10);
        let updated = place("p1", coord(1.0, 1.0)).with_rating(2.0, 99);

        assert_eq!(store.add(&original).len(), 1);
        let after = store.add(&updated);
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].rating, Some(4.0));
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let (_, store) = memory_store();
        store.add(&place("p1", coord(0.0, 0.0)));
        assert_eq!(store.remove("nope").len(), 1);
        assert!(store.remove("p1").is_empty());
        assert!(store.remove("p1").is_empty());
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let (_, store) = memory_store();
        let p = place("p1", coord(0.0, 0.0));
        store.add(&place("other", coord(0.0, 0.0)));

        assert!(!store.is_favorite("p1"));
        store.toggle(&p);
        assert!(store.is_favorite("p1"));
        store.toggle(&p);
        assert!(!store.is_favorite("p1"));
        assert_eq!(store.len(), 1);

        store.add(&p);
        store.toggle(&p);
        assert!(!store.is_favorite("p1"));
        store.toggle(&p);
        assert!(store.is_favorite("p1"));
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let (_, store) = memory_store();
        for id in ["c", "a", "b"] {
            store.add(&place(id, coord(0.0, 0.0)));
        }
        let ids: Vec<String> = store.list().into_iter().map(|r| r.place_id).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn test_mutations_are_persisted() {
        let (backend, store) = memory_store();
        store.add(&place("p1", coord(0.0, 0.0)));
        store.add(&place("p2", coord(0.0, 0.0)));
        store.remove("p1");

        let reloaded = FavoritesStore::load(backend);
        assert_eq!(reloaded.list(), store.list());
        assert!(reloaded.is_favorite("p2"));
        assert!(!reloaded.is_favorite("p1"));
    }

    #[test]
    fn test_corrupt_backend_loads_empty() {
        let backend = Arc::new(MemoryStore::with_entry(FAVORITES_KEY, "[{\"broken\""));
        let store = FavoritesStore::load(backend);
        assert!(store.is_empty());
    }

    #[test]
    fn test_duplicates_in_backend_are_dropped() {
        let (backend, store) = memory_store();
        store.add(&place("p1", coord(0.0, 0.0)));
        let record = store.list().remove(0);
        let dup = serde_json::to_string(&vec![record.clone(), record]).unwrap();
        backend.set(FAVORITES_KEY, &dup).unwrap();

        let reloaded = FavoritesStore::load(backend);
        assert_eq!(reloaded.len(), 1);
    }

    #[test]
    fn test_failed_writes_keep_memory_state() {
        let backend = Arc::new(FailingStore::new());
        let store = FavoritesStore::load(backend.clone());
        let p = place("p1", coord(0.0, 0.0));

        assert_eq!(store.add(&p).len(), 1);
        assert!(store.is_favorite("p1"));
        assert!(store.toggle(&p).is_empty());
        assert!(!store.is_favorite("p1"));
        assert_eq!(backend.write_attempts(), 2);
    }

    #[test]
    fn test_clear_removes_key() {
        let (backend, store) = memory_store();
        store.add(&place("p1", coord(0.0, 0.0)));
        assert!(store.clear().is_empty());
        assert!(backend.get(FAVORITES_KEY).unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_concurrent_adds_are_serialized() {
        let (backend, store) = memory_store();
        let store = Arc::new(store);

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..25 {
                        store.add(&place(&format!("p{}", (t * 25 + i) % 100), coord(0.0, 0.0)));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 100);
        assert_eq!(FavoritesStore::load(backend).len(), 100);
    }
}

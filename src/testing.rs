//! Testing utilities for nearby
//!
//! Fixture constructors for coordinates and places, and a
//! `FailingStore` backend for exercising the degrade-and-log paths of the
//! persistent stores.
//!
//! Only available when compiled with `cfg(test)`.

use crate::geo::Coordinate;
use crate::places::Place;
use crate::storage::{KeyValueStore, StorageError};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Meters per degree of latitude on the haversine sphere
const METERS_PER_DEGREE: f64 = 111_195.0;

/// Build a coordinate, panicking on out-of-range input
///
/// # Panics
/// Panics if `lat` or `lng` is out of range.
#[must_use]
pub fn coord(lat: f64, lng: f64) -> Coordinate {
    Coordinate::new(lat, lng).expect("test coordinate out of range")
}

/// A coordinate `meters` due north of `origin`
#[must_use]
pub fn offset_north(origin: &Coordinate, meters: f64) -> Coordinate {
    coord(origin.lat() + meters / METERS_PER_DEGREE, origin.lng())
}

/// A place with only the required fields, named after its id
#[must_use]
pub fn place(id: &str, location: Coordinate) -> Place {
    Place::new(id, format!("Place {id}"), location)
}

/// Key-value backend whose every operation fails
///
/// Counts attempted writes so tests can check a write was tried.
#[derive(Debug, Default)]
pub struct FailingStore {
    writes: AtomicUsize,
}

impl FailingStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` and `remove` calls seen
    pub fn write_attempts(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn unavailable() -> StorageError {
        StorageError::Unavailable("backend offline".into())
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(Self::unavailable())
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Err(Self::unavailable())
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Err(Self::unavailable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::distance;

    #[test]
    fn test_offset_north_distance() {
        let origin = coord(10.0, 20.0);
        let moved = offset_north(&origin, 500.0);
        assert!((distance(&origin, &moved) - 500.0).abs() < 1.0);
    }

    #[test]
    fn test_place_fixture() {
        let p = place("abc", coord(0.0, 0.0));
        assert_eq!(p.id, "abc");
        assert_eq!(p.name, "Place abc");
        assert!(p.rating.is_none());
    }

    #[test]
    fn test_failing_store_counts_writes() {
        let store = FailingStore::new();
        assert!(store.get("k").is_err());
        assert!(store.set("k", "v").is_err());
        assert!(store.remove("k").is_err());
        assert_eq!(store.write_attempts(), 2);
    }
}

//! Persistent favorites
//!
//! Favorites are point-in-time snapshots of places, keyed by place id, and
//! persisted through a [`KeyValueStore`](crate::storage::KeyValueStore).
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use nearby::favorites::FavoritesStore;
//! use nearby::geo::Coordinate;
//! use nearby::places::Place;
//! use nearby::storage::MemoryStore;
//!
//! let favorites = FavoritesStore::load(Arc::new(MemoryStore::new()));
//! let cafe = Place::new("cafe-1", "Blue Tokai", Coordinate::new(28.63, 77.22).unwrap());
//!
//! favorites.toggle(&cafe);
//! assert!(favorites.is_favorite("cafe-1"));
//! favorites.toggle(&cafe);
//! assert!(!favorites.is_favorite("cafe-1"));
//! ```

pub mod store;
pub mod types;

pub use store::{FAVORITES_KEY, FavoritesStore};
pub use types::FavoriteRecord;

//! Favorite snapshot record

use crate::geo::Coordinate;
use crate::places::{PhotoRef, Place};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a place taken when it was favorited
///
/// Records are replaced, never patched: re-favoriting after removal takes
/// a fresh snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    pub place_id: String,
    pub name: String,
    pub location: Coordinate,
    #[serde(default)]
    pub rating: Option<f64>,
    /// First photo of the place, if it had any
    #[serde(default)]
    pub photo: Option<PhotoRef>,
    #[serde(default)]
    pub address: Option<String>,
    pub added_at: DateTime<Utc>,
}

impl FavoriteRecord {
    /// Snapshot `place` with the current time
    #[must_use]
    pub fn from_place(place: &Place) -> Self {
        Self::from_place_at(place, Utc::now())
    }

    /// Snapshot `place` with an explicit timestamp
    #[must_use]
    pub fn from_place_at(place: &Place, added_at: DateTime<Utc>) -> Self {
        Self {
            place_id: place.id.clone(),
            name: place.name.clone(),
            location: place.location,
            rating: place.rating,
            photo: place.primary_photo().cloned(),
            address: place.address().map(str::to_string),
            added_at,
        }
    }
}

//! Place, price level, photo and review types

use crate::geo::Coordinate;
use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;

/// Highest rating a provider can report
const MAX_RATING: f64 = 5.0;

/// Provider price bracket, serialized as the integer `0..=4`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PriceLevel {
    Free,
    Inexpensive,
    Moderate,
    Expensive,
    VeryExpensive,
}

impl PriceLevel {
    /// Numeric level as reported by the provider
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Free => 0,
            Self::Inexpensive => 1,
            Self::Moderate => 2,
            Self::Expensive => 3,
            Self::VeryExpensive => 4,
        }
    }

    /// Currency symbols repeated once per level; empty for `Free`
    #[must_use]
    pub fn symbols(self) -> String {
        "₹".repeat(usize::from(self.level()))
    }
}

impl TryFrom<u8> for PriceLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Free),
            1 => Ok(Self::Inexpensive),
            2 => Ok(Self::Moderate),
            3 => Ok(Self::Expensive),
            4 => Ok(Self::VeryExpensive),
            other => Err(format!("price level must be in 0..=4, got {other}")),
        }
    }
}

impl From<PriceLevel> for u8 {
    fn from(level: PriceLevel) -> Self {
        level.level()
    }
}

impl fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Free => "Free",
            Self::Inexpensive => "Budget",
            Self::Moderate => "Moderate",
            Self::Expensive => "Expensive",
            Self::VeryExpensive => "Very Expensive",
        };
        f.write_str(label)
    }
}

/// Opaque reference to a provider-hosted photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRef {
    pub reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// A user review, only present on detail lookups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    pub rating: f64,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_time: Option<String>,
}

fn deserialize_rating<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<f64>::deserialize(deserializer)? {
        Some(rating) if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) => Err(de::Error::custom(
            format!("rating must be in 0..={MAX_RATING}, got {rating}"),
        )),
        rating => Ok(rating),
    }
}

/// A candidate point of interest
///
/// `id` is the identity: two records with the same `id` describe the same
/// place even if one is a summary and the other a detailed fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub location: Coordinate,

    /// Average rating in `[0, 5]`
    #[serde(default, deserialize_with = "deserialize_rating", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    /// Number of ratings behind `rating`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_level: Option<PriceLevel>,

    /// Whether the place was open when the provider answered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_now: Option<bool>,

    /// Short neighbourhood address returned by nearby searches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vicinity: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photos: Vec<PhotoRef>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviews: Vec<Review>,

    /// Provider type tags such as `restaurant` or `cafe`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,

    /// Opening hours, one line per weekday
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weekday_hours: Vec<String>,
}

impl Place {
    /// Create a place with only the identifying fields set
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, location: Coordinate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location,
            rating: None,
            rating_count: None,
            price_level: None,
            open_now: None,
            vicinity: None,
            formatted_address: None,
            phone: None,
            website: None,
            photos: Vec::new(),
            reviews: Vec::new(),
            types: Vec::new(),
            weekday_hours: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_rating(mut self, rating: f64, count: u32) -> Self {
        self.rating = Some(rating);
        self.rating_count = Some(count);
        self
    }

    #[must_use]
    pub const fn with_price_level(mut self, level: PriceLevel) -> Self {
        self.price_level = Some(level);
        self
    }

    #[must_use]
    pub const fn with_open_now(mut self, open: bool) -> Self {
        self.open_now = Some(open);
        self
    }

    #[must_use]
    pub fn with_vicinity(mut self, vicinity: impl Into<String>) -> Self {
        self.vicinity = Some(vicinity.into());
        self
    }

    /// Best available address: the formatted address, else the vicinity
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.formatted_address
            .as_deref()
            .or(self.vicinity.as_deref())
    }

    /// First photo, used as the thumbnail
    #[must_use]
    pub fn primary_photo(&self) -> Option<&PhotoRef> {
        self.photos.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn here() -> Coordinate {
        Coordinate::new(28.6, 77.2).unwrap()
    }

    #[test]
    fn test_price_level_round_trip_through_integer() {
        for n in 0..=4u8 {
            let level = PriceLevel::try_from(n).unwrap();
            assert_eq!(u8::from(level), n);
        }
        assert!(PriceLevel::try_from(5).is_err());
    }

    #[test]
    fn test_price_level_symbols() {
        assert_eq!(PriceLevel::Free.symbols(), "");
        assert_eq!(PriceLevel::Expensive.symbols(), "₹₹₹");
    }

    #[test]
    fn test_place_deserializes_with_missing_optionals() {
        let json = r#"{"id": "p1", "name": "Cafe", "location": {"lat": 1.0, "lng": 2.0}}"#;
        let place: Place = serde_json::from_str(json).unwrap();
        assert_eq!(place.id, "p1");
        assert!(place.rating.is_none());
        assert!(place.price_level.is_none());
        assert!(place.open_now.is_none());
        assert!(place.photos.is_empty());
    }

    #[test]
    fn test_place_rejects_invalid_price_level() {
        let json = r#"{"id": "p1", "name": "Cafe", "location": {"lat": 1.0, "lng": 2.0}, "price_level": 7}"#;
        assert!(serde_json::from_str::<Place>(json).is_err());
    }

    #[test]
    fn test_address_prefers_formatted_address() {
        let mut place = Place::new("p", "P", here()).with_vicinity("Connaught Place");
        assert_eq!(place.address(), Some("Connaught Place"));

        place.formatted_address = Some("Block A, Connaught Place, New Delhi".into());
        assert_eq!(place.address(), Some("Block A, Connaught Place, New Delhi"));
    }

    #[test]
    fn test_place_rejects_out_of_range_rating() {
        let json = r#"{"id": "p1", "name": "Cafe", "location": {"lat": 1.0, "lng": 2.0}, "rating": 7.0}"#;
        assert!(serde_json::from_str::<Place>(json).is_err());

        let json = r#"{"id": "p1", "name": "Cafe", "location": {"lat": 1.0, "lng": 2.0}, "rating": -0.5}"#;
        assert!(serde_json::from_str::<Place>(json).is_err());

        let json = r#"{"id": "p1", "name": "Cafe", "location": {"lat": 1.0, "lng": 2.0}, "rating": 5.0}"#;
        assert_eq!(serde_json::from_str::<Place>(json).unwrap().rating, Some(5.0));

        let json = r#"{"id": "p1", "name": "Cafe", "location": {"lat": 1.0, "lng": 2.0}, "rating": null}"#;
        assert!(serde_json::from_str::<Place>(json).unwrap().rating.is_none());
    }
}

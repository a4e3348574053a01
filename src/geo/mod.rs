//! Geographic primitives
//!
//! Provides the validated [`Coordinate`] value type and great-circle
//! distance calculation using the haversine formula.

pub mod error;

pub use error::GeoError;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean Earth radius in meters
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Fallback reference location (New Delhi) when no position is available
pub const DEFAULT_CENTER: Coordinate = Coordinate {
    lat: 28.6139,
    lng: 77.2090,
};

/// A latitude/longitude pair in decimal degrees
///
/// Always holds a finite latitude in `[-90, 90]` and a finite longitude in
/// `[-180, 180]`. Deserialization goes through the same validation as
/// [`Coordinate::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = GeoError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Self::new(raw.lat, raw.lng)
    }
}

impl Coordinate {
    /// Create a coordinate, rejecting out-of-range or non-finite values
    ///
    /// # Errors
    ///
    /// Returns `GeoError::InvalidLatitude` or `GeoError::InvalidLongitude`
    /// when the corresponding component is out of range.
    pub fn new(lat: f64, lng: f64) -> Result<Self, GeoError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(GeoError::InvalidLatitude(lat));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(GeoError::InvalidLongitude(lng));
        }
        Ok(Self { lat, lng })
    }

    /// Latitude in decimal degrees
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees
    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.lng
    }

    /// Distance in meters from this coordinate to `other`
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        distance(self, other)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

/// Great-circle distance between two coordinates in meters
///
/// Uses the haversine formula with a spherical Earth of radius
/// [`EARTH_RADIUS_METERS`]. The result is symmetric, zero for identical
/// inputs and finite for every valid coordinate.
#[must_use]
pub fn distance(a: &Coordinate, b: &Coordinate) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let delta_phi = (b.lat - a.lat).to_radians();
    let delta_lambda = (b.lng - a.lng).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    // Rounding can push h slightly outside [0, 1] for antipodal points
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Human-readable distance: whole meters below 1 km, otherwise kilometers
/// with one decimal (`"350m"`, `"1.2km"`)
#[must_use]
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{}m", meters.round())
    } else {
        format!("{:.1}km", meters / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        for c in [coord(0.0, 0.0), coord(28.6139, 77.2090), coord(-90.0, 180.0)] {
            assert_eq!(distance(&c, &c), 0.0);
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        let delhi = coord(28.6139, 77.2090);
        let mumbai = coord(19.0760, 72.8777);
        let ab = distance(&delhi, &mumbai);
        let ba = distance(&mumbai, &delhi);
        assert!((ab - ba).abs() < 1e-6);
    }

    #[test]
    fn test_distance_known_value() {
        // Delhi to Mumbai is roughly 1150 km along the great circle
        let d = distance(&coord(28.6139, 77.2090), &coord(19.0760, 72.8777));
        assert!((1_140_000.0..1_160_000.0).contains(&d), "got {d}");
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let d = distance(&coord(0.0, 0.0), &coord(1.0, 0.0));
        assert!((d - 111_195.0).abs() < 10.0, "got {d}");
    }

    #[test]
    fn test_antipodal_points_are_finite() {
        let d = distance(&coord(0.0, 0.0), &coord(0.0, 180.0));
        assert!(d.is_finite());
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_METERS).abs() < 1.0);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(Coordinate::new(90.5, 0.0), Err(GeoError::InvalidLatitude(90.5)));
        assert_eq!(Coordinate::new(0.0, -180.5), Err(GeoError::InvalidLongitude(-180.5)));
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Coordinate = serde_json::from_str(r#"{"lat": 12.5, "lng": -3.25}"#).unwrap();
        assert_eq!(ok, coord(12.5, -3.25));

        let bad = serde_json::from_str::<Coordinate>(r#"{"lat": 120.0, "lng": 0.0}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(349.6), "350m");
        assert_eq!(format_distance(0.0), "0m");
        assert_eq!(format_distance(1000.0), "1.0km");
        assert_eq!(format_distance(1234.0), "1.2km");
    }
}

//! Error types for coordinate validation

use thiserror::Error;

/// Errors raised when constructing a coordinate from raw values
#[derive(Debug, Error, PartialEq)]
pub enum GeoError {
    /// Latitude outside [-90, 90] or not a finite number
    #[error("Invalid latitude {0}: must be a finite value in [-90, 90]")]
    InvalidLatitude(f64),

    /// Longitude outside [-180, 180] or not a finite number
    #[error("Invalid longitude {0}: must be a finite value in [-180, 180]")]
    InvalidLongitude(f64),
}

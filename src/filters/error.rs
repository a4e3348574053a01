//! Error types for filter criteria validation

use thiserror::Error;

/// Errors raised when filter criteria are malformed
#[derive(Debug, Error, PartialEq)]
pub enum FilterError {
    /// Search radius must be positive
    #[error("Invalid radius: must be greater than 0 meters")]
    InvalidRadius,

    /// Minimum rating outside `[0, 5]`
    #[error("Invalid minimum rating {0}: must be between 0 and 5")]
    InvalidMinRating(f64),

    /// Unknown sort key name
    #[error("Unknown sort key '{0}' (expected distance, rating or popularity)")]
    UnknownSortKey(String),
}

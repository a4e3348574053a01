//! Current-position port
//!
//! Acquiring the device position is outside the core. Callers hand in a
//! [`LocationSource`] and fall back to a default centre when it fails.

use crate::geo::Coordinate;
use thiserror::Error;

/// Errors from a location source
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocationError {
    /// The user refused location access
    #[error("Location permission denied")]
    PermissionDenied,

    /// No position could be determined
    #[error("Location unavailable: {0}")]
    Unavailable(String),
}

/// Source of the user's current position
pub trait LocationSource {
    /// Current position
    ///
    /// # Errors
    ///
    /// Returns `LocationError` if no position is available.
    fn current_position(&self) -> Result<Coordinate, LocationError>;
}

/// A location source that always reports the same coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLocation(pub Coordinate);

impl LocationSource for FixedLocation {
    fn current_position(&self) -> Result<Coordinate, LocationError> {
        Ok(self.0)
    }
}

/// Current position from `source`, or `fallback` if it fails
pub fn position_or(source: &dyn LocationSource, fallback: Coordinate) -> Coordinate {
    source.current_position().unwrap_or_else(|e| {
        log::info!("{e}; using {fallback}");
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::DEFAULT_CENTER;

    #[test]
    fn test_fixed_location() {
        let here = Coordinate::new(19.076, 72.8777).unwrap();
        assert_eq!(position_or(&FixedLocation(here), DEFAULT_CENTER), here);
    }

    struct Denied;

    impl LocationSource for Denied {
        fn current_position(&self) -> Result<Coordinate, LocationError> {
            Err(LocationError::PermissionDenied)
        }
    }

    #[test]
    fn test_falls_back_on_error() {
        assert_eq!(position_or(&Denied, DEFAULT_CENTER), DEFAULT_CENTER);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(LocationError::PermissionDenied.to_string(), "Location permission denied");
    }
}

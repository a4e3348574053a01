//! Place provider error types
//!
//! A provider error is a failed search. It is always distinct from a search
//! that succeeded with zero results, which is an empty `Vec`.

use std::io;
use thiserror::Error;

/// Errors reported by a place provider
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No place with this id
    #[error("Place '{0}' not found")]
    NotFound(String),

    /// Transport, quota or availability failure
    #[error("Place provider unavailable: {0}")]
    Unavailable(String),

    /// The request was rejected as malformed
    #[error("Invalid search request: {0}")]
    InvalidRequest(String),

    /// I/O error while reading provider data
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Provider data could not be parsed
    #[error("Malformed provider data: {0}")]
    Parse(#[from] serde_json::Error),
}

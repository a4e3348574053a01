//! Storage-specific error types
//!
//! These errors only surface at the key-value backend boundary. The
//! favorites and recent-entries stores log them and degrade instead of
//! propagating them.

use thiserror::Error;

/// Key-value backend errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Represents a sled database error
    #[error("Database error: {0}")]
    SledError(#[from] sled::Error),

    /// Stored bytes are not valid UTF-8 text
    #[error("Value for key '{0}' is not valid UTF-8")]
    InvalidText(String),

    /// Value could not be (de)serialized
    #[error("Error during serialization: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// In-memory backend lock was poisoned by a panicking writer
    #[error("Storage lock poisoned")]
    Poisoned,

    /// Backend refused the operation
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;

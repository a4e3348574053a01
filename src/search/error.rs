//! Search-specific error types
//!
//! - **`Provider`**: the place provider failed; distinct from zero results
//! - **`InvalidCriteria`**: filter criteria failed validation
//! - **`Pagination`**: invalid page size

use thiserror::Error;

/// Search-specific errors
#[derive(Debug, Error)]
pub enum SearchError {
    /// The place provider failed
    #[error("Search failed: {0}")]
    Provider(#[from] crate::provider::ProviderError),

    /// Filter criteria are invalid
    #[error("Invalid filter criteria: {0}")]
    InvalidCriteria(#[from] crate::filters::FilterError),

    /// Pagination is misconfigured
    #[error("Pagination error: {0}")]
    Pagination(#[from] crate::pagination::PaginationError),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;

//! Nearby - rank, filter and paginate places around a location
//!
//! This library turns a raw list of candidate places plus user-chosen
//! criteria into an ordered, paginated view, and keeps a persistent
//! favorites list and recent searches/locations in a key-value store.
//!
//! Collaborators outside the core (place provider, storage backend,
//! position) are reached through the traits in [`provider`], [`storage`]
//! and [`location`].

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod favorites;
pub mod filters;
pub mod geo;
pub mod location;
pub mod logging;
pub mod output;
pub mod pagination;
pub mod places;
pub mod provider;
pub mod recent;
pub mod search;
pub mod storage;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum NearbyError {
    /// Storage backend error
    #[error("Storage error: {0}")]
    StorageError(#[from] storage::StorageError),
    /// Place provider error
    #[error("Provider error: {0}")]
    ProviderError(#[from] provider::ProviderError),
    /// Search error
    #[error("Search error: {0}")]
    SearchError(#[from] search::SearchError),
    /// Invalid filter criteria
    #[error("Filter error: {0}")]
    FilterError(#[from] filters::FilterError),
    /// Invalid coordinate
    #[error("Location error: {0}")]
    GeoError(#[from] geo::GeoError),
    /// Invalid page size
    #[error("Pagination error: {0}")]
    PaginationError(#[from] pagination::PaginationError),
    /// Position could not be determined
    #[error("Position error: {0}")]
    LocationError(#[from] location::LocationError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Logger could not be installed
    #[error("Logger error: {0}")]
    LoggerError(#[from] log::SetLoggerError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

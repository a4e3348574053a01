//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs the operation against the place provider and the key-value store.

pub mod config;
pub mod details;
pub mod favorites;
pub mod history;
pub mod location;
pub mod search;

// Re-export execute functions for convenience
pub use config::execute as config;
pub use details::execute as details;
pub use favorites::execute as favorites;
pub use history::execute as history;
pub use location::execute as location;
pub use search::execute as search;

use crate::{NearbyError, config::NearbyConfig, provider::JsonFileProvider};
use std::path::Path;

/// Open the offline provider from `--places` or the configured places file
///
/// # Errors
///
/// Returns `NearbyError::InvalidInput` if neither is set, or
/// `NearbyError::ProviderError` if the file cannot be read.
pub fn open_provider(places: Option<&Path>, config: &NearbyConfig) -> Result<JsonFileProvider, NearbyError> {
    let path = places.or(config.places_file.as_deref()).ok_or_else(|| {
        NearbyError::InvalidInput("No places file: pass --places or set places_file in the config".into())
    })?;

    Ok(JsonFileProvider::open(path)?)
}

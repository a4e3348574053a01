//! Details command - show everything the provider knows about a place

use crate::{
    NearbyError,
    config::NearbyConfig,
    favorites::FavoritesStore,
    output,
    provider::PlaceSearch,
    storage::KeyValueStore,
};
use std::path::Path;
use std::sync::Arc;

type Result<T> = std::result::Result<T, NearbyError>;

/// Execute the details command
pub fn execute(
    id: &str,
    places: Option<&Path>,
    config: &NearbyConfig,
    backend: Arc<dyn KeyValueStore>,
    quiet: bool,
) -> Result<()> {
    let provider = super::open_provider(places, config)?;
    let place = provider.details(id)?;

    if quiet {
        println!("{}", serde_json::to_string_pretty(&place).map_err(crate::provider::ProviderError::from)?);
        return Ok(());
    }

    let favorites = FavoritesStore::load(backend);
    println!("{}", output::place_details(&place, favorites.is_favorite(&place.id)));
    Ok(())
}

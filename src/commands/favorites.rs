//! Favorites command - add, remove, toggle, list and clear favorites

use crate::{
    NearbyError,
    cli::FavCommands,
    config::NearbyConfig,
    favorites::FavoritesStore,
    output,
    provider::PlaceSearch,
    storage::KeyValueStore,
};
use dialoguer::{Confirm, theme::ColorfulTheme};
use std::path::Path;
use std::sync::Arc;

type Result<T> = std::result::Result<T, NearbyError>;

/// Execute a favorites subcommand
pub fn execute(
    command: &FavCommands,
    config: &NearbyConfig,
    backend: Arc<dyn KeyValueStore>,
    quiet: bool,
) -> Result<()> {
    let store = FavoritesStore::load(backend);

    match command {
        FavCommands::Add { id, provider } => add(&store, id, provider.places.as_deref(), config, quiet),
        FavCommands::Remove { id } => {
            remove(&store, id, quiet);
            Ok(())
        }
        FavCommands::Toggle { id, provider } => toggle(&store, id, provider.places.as_deref(), config, quiet),
        FavCommands::List => {
            list(&store, quiet);
            Ok(())
        }
        FavCommands::Clear { force } => clear(&store, *force, quiet),
    }
}

fn add(store: &FavoritesStore, id: &str, places: Option<&Path>, config: &NearbyConfig, quiet: bool) -> Result<()> {
    if store.is_favorite(id) {
        if !quiet {
            println!("'{id}' is already a favorite.");
        }
        return Ok(());
    }

    let provider = super::open_provider(places, config)?;
    let place = provider.details(id)?;
    store.add(&place);

    if !quiet {
        println!("Added {} to favorites.", place.name);
    }
    Ok(())
}

/// Removing needs only the id; adding needs the place from the provider
fn toggle(store: &FavoritesStore, id: &str, places: Option<&Path>, config: &NearbyConfig, quiet: bool) -> Result<()> {
    if store.is_favorite(id) {
        remove(store, id, quiet);
        return Ok(());
    }

    let provider = super::open_provider(places, config)?;
    let place = provider.details(id)?;
    store.toggle(&place);

    if !quiet && store.is_favorite(&place.id) {
        println!("Added {} to favorites.", place.name);
    }
    Ok(())
}

fn remove(store: &FavoritesStore, id: &str, quiet: bool) {
    let name = store.get(id).map(|record| record.name);
    store.remove(id);

    if !quiet {
        match name {
            Some(name) => println!("Removed {name} from favorites."),
            None => println!("'{id}' is not a favorite."),
        }
    }
}

fn list(store: &FavoritesStore, quiet: bool) {
    let records = store.list();

    if records.is_empty() {
        if !quiet {
            println!("No favorites yet.");
        }
        return;
    }

    if !quiet {
        println!("Favorites ({}):", records.len());
    }
    for record in &records {
        println!("{}", output::favorite_row(record, quiet));
    }
}

fn clear(store: &FavoritesStore, force: bool, quiet: bool) -> Result<()> {
    if store.is_empty() {
        if !quiet {
            println!("No favorites to clear.");
        }
        return Ok(());
    }

    if !force && !quiet {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Remove all {} favorite(s)?", store.len()))
            .default(false)
            .interact()
            .map_err(|e| NearbyError::InvalidInput(format!("Failed to read input: {e}")))?;

        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    store.clear();
    if !quiet {
        println!("Favorites cleared.");
    }
    Ok(())
}

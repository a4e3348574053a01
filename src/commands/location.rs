//! Location command - save, list and clear named locations

use crate::{
    NearbyError,
    cli::LocationCommands,
    config::NearbyConfig,
    geo::Coordinate,
    output,
    recent::RecentLocations,
    storage::KeyValueStore,
};
use std::sync::Arc;

type Result<T> = std::result::Result<T, NearbyError>;

/// Execute a location subcommand
pub fn execute(
    command: &LocationCommands,
    config: &NearbyConfig,
    backend: Arc<dyn KeyValueStore>,
    quiet: bool,
) -> Result<()> {
    let recent = RecentLocations::locations(backend, config.recent_locations_capacity);

    match command {
        LocationCommands::Set { label, lat, lng } => {
            if label.trim().is_empty() {
                return Err(NearbyError::InvalidInput("Location label cannot be empty".into()));
            }
            let location = Coordinate::new(*lat, *lng)?;
            recent.record(label.as_str(), location);
            if !quiet {
                println!("Saved {label} at {location}");
            }
        }
        LocationCommands::List => {
            let entries = recent.list();
            if entries.is_empty() {
                if !quiet {
                    println!("No saved locations.");
                }
            } else {
                if !quiet {
                    println!("Saved locations:");
                }
                for entry in &entries {
                    println!("{}", output::location_row(entry, quiet));
                }
            }
        }
        LocationCommands::Clear => {
            recent.clear();
            if !quiet {
                println!("Saved locations cleared.");
            }
        }
    }

    Ok(())
}

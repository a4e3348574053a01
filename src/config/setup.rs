//! Interactive setup wizard for first-time configuration
//!
//! Prompts for the places file and the default search centre when nearby is
//! run for the first time.

use super::NearbyConfig;
use crate::geo::Coordinate;
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::{Path, PathBuf};

fn prompt_error(e: dialoguer::Error) -> ConfigError {
    ConfigError::Message(format!("Failed to read input: {e}"))
}

/// Interactive first-time setup
///
/// 1. Prompts for the places file (may be left empty)
/// 2. Prompts for the default centre latitude and longitude
/// 3. Saves the configuration to `config_path`
///
/// # Errors
///
/// Returns `ConfigError` if user input cannot be read, the centre is not a
/// valid coordinate, or the configuration cannot be saved.
pub fn first_time_setup(config_path: &Path) -> Result<NearbyConfig, ConfigError> {
    println!("Welcome to nearby! Let's set up your configuration.\n");

    let theme = ColorfulTheme::default();
    let mut config = NearbyConfig::default();

    let places_file: String = Input::with_theme(&theme)
        .with_prompt("Places file (JSON, leave empty to pass --places)")
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;

    let places_file = places_file.trim();
    if !places_file.is_empty() {
        config.places_file = Some(PathBuf::from(places_file));
    }

    let lat: f64 = Input::with_theme(&theme)
        .with_prompt("Default latitude")
        .default(config.default_center.lat())
        .interact_text()
        .map_err(prompt_error)?;

    let lng: f64 = Input::with_theme(&theme)
        .with_prompt("Default longitude")
        .default(config.default_center.lng())
        .interact_text()
        .map_err(prompt_error)?;

    config.default_center =
        Coordinate::new(lat, lng).map_err(|e| ConfigError::Message(e.to_string()))?;

    config.save_to(config_path)?;

    println!("\nConfiguration saved to {}", config_path.display());
    Ok(config)
}

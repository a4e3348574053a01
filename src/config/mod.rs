//! Configuration module for nearby
//!
//! Manages the database location, the places file, paging and the default
//! search area. Configuration is stored in the user's config directory and
//! can be overridden with `NEARBY_`-prefixed environment variables
//! (`NEARBY_PAGE_SIZE=20`, `NEARBY_DEFAULT_CENTER__LAT=19.07`).

mod setup;

pub use setup::first_time_setup;

use crate::filters::DEFAULT_RADIUS_METERS;
use crate::geo::{Coordinate, DEFAULT_CENTER};
use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::recent::{DEFAULT_LOCATION_CAPACITY, DEFAULT_SEARCH_CAPACITY};
use config::{Config, ConfigError, Environment, File, FileFormat};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default verbosity of the logger
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => Self::Off,
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NearbyConfig {
    /// Directory of the sled database holding favorites and recent entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,

    /// JSON file of places served by the offline provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub places_file: Option<PathBuf>,

    /// Places per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Search centre when no location is given
    #[serde(default = "default_center")]
    pub default_center: Coordinate,

    /// Search radius when none is given
    #[serde(default = "default_radius")]
    pub default_radius_meters: u32,

    #[serde(default = "default_location_capacity")]
    pub recent_locations_capacity: usize,

    #[serde(default = "default_search_capacity")]
    pub recent_searches_capacity: usize,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    #[serde(default)]
    pub log_level: LogLevel,
}

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

const fn default_center() -> Coordinate {
    DEFAULT_CENTER
}

const fn default_radius() -> u32 {
    DEFAULT_RADIUS_METERS
}

const fn default_location_capacity() -> usize {
    DEFAULT_LOCATION_CAPACITY
}

const fn default_search_capacity() -> usize {
    DEFAULT_SEARCH_CAPACITY
}

impl Default for NearbyConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            places_file: None,
            page_size: DEFAULT_PAGE_SIZE,
            default_center: DEFAULT_CENTER,
            default_radius_meters: DEFAULT_RADIUS_METERS,
            recent_locations_capacity: DEFAULT_LOCATION_CAPACITY,
            recent_searches_capacity: DEFAULT_SEARCH_CAPACITY,
            quiet: false,
            log_level: LogLevel::default(),
        }
    }
}

impl NearbyConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("nearby").join("config.toml"))
    }

    /// Load configuration from the default path, creating it if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if it doesn't exist
    ///
    /// Environment overrides apply on top of the file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created,
    /// or if the loaded values are invalid.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            Self::default().save_to(path)?;
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .add_source(
                Environment::with_prefix("NEARBY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration, running first-time setup if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            first_time_setup(&config_path)
        }
    }

    /// Save configuration to the default path
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        fs::write(path, self.to_toml()?)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Render the configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }

    /// Reject values the engine cannot work with
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Message("page_size must be greater than 0".into()));
        }
        if self.default_radius_meters == 0 {
            return Err(ConfigError::Message(
                "default_radius_meters must be greater than 0".into(),
            ));
        }
        if self.recent_locations_capacity == 0 || self.recent_searches_capacity == 0 {
            return Err(ConfigError::Message(
                "recent entry capacities must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Database directory, defaulting to the user's data directory
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no path is configured and the system data
    /// directory cannot be determined.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.database_path {
            return Ok(path.clone());
        }

        dirs::data_local_dir()
            .map(|dir| dir.join("nearby").join("db"))
            .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = NearbyConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.default_radius_meters, 5000);
        assert_eq!(config.default_center, DEFAULT_CENTER);
        assert_eq!(config.recent_locations_capacity, 5);
        assert_eq!(config.recent_searches_capacity, 10);
        assert!(!config.quiet);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = NearbyConfig::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.page_size, NearbyConfig::default().page_size);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let config = NearbyConfig {
            database_path: Some(dir.path().join("db")),
            places_file: Some(PathBuf::from("/data/places.json")),
            page_size: 25,
            default_center: Coordinate::new(19.076, 72.8777).unwrap(),
            default_radius_meters: 1500,
            recent_locations_capacity: 3,
            recent_searches_capacity: 7,
            quiet: true,
            log_level: LogLevel::Debug,
        };
        config.save_to(&path).unwrap();

        let loaded = NearbyConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "page_size = 5\n").unwrap();

        let loaded = NearbyConfig::load_from(&path).unwrap();
        assert_eq!(loaded.page_size, 5);
        assert_eq!(loaded.default_radius_meters, DEFAULT_RADIUS_METERS);
        assert!(loaded.places_file.is_none());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        fs::write(&path, "page_size = 0\n").unwrap();
        assert!(NearbyConfig::load_from(&path).is_err());

        fs::write(&path, "[default_center]\nlat = 95.0\nlng = 0.0\n").unwrap();
        assert!(NearbyConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_database_path_prefers_configured() {
        let config = NearbyConfig {
            database_path: Some(PathBuf::from("/tmp/nearby-db")),
            ..NearbyConfig::default()
        };
        assert_eq!(config.database_path().unwrap(), PathBuf::from("/tmp/nearby-db"));
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(LevelFilter::from(LogLevel::Off), LevelFilter::Off);
        assert_eq!(LevelFilter::from(LogLevel::Debug), LevelFilter::Debug);
    }
}

//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for nearby using the `clap` crate.
//!
//! # Commands
//!
//! - **search**: Rank places around a location and print one page
//! - **details**: Show everything the provider knows about a place
//! - **fav**: Manage favorites (add, remove, toggle, list, clear)
//! - **location**: Manage saved locations
//! - **history**: Recent search terms and suggestions
//! - **config**: Show the configuration
//! - **completions**: Generate shell completions
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use nearby::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["nearby", "search", "coffee", "--sort", "rating"]);
//! assert!(matches!(cli.command, Commands::Search(_)));
//! ```

use crate::filters::SortKey;
use crate::places::Category;
use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Where to read places from
#[derive(Args, Debug, Clone, Default)]
pub struct ProviderArgs {
    /// JSON file of places (overrides `places_file` in the config)
    #[arg(long = "places", value_name = "FILE")]
    pub places: Option<PathBuf>,
}

/// Arguments of the search command
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Keyword matched against name, address and type
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Restrict to one category (restaurant, cafe, gas_station, ...)
    #[arg(short = 'c', long = "category", value_name = "CATEGORY")]
    pub category: Option<Category>,

    /// Latitude of the search centre
    #[arg(long = "lat", requires = "lng", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude of the search centre
    #[arg(long = "lng", requires = "lat", allow_negative_numbers = true)]
    pub lng: Option<f64>,

    /// Search around a saved location
    #[arg(long = "at", value_name = "LABEL", conflicts_with_all = ["lat", "lng"])]
    pub at: Option<String>,

    /// Save the --lat/--lng centre under this label
    #[arg(long = "save-as", value_name = "LABEL", requires = "lat")]
    pub save_as: Option<String>,

    /// Search radius in meters
    #[arg(short = 'r', long = "radius", value_name = "METERS")]
    pub radius: Option<u32>,

    /// Minimum rating (0 disables the rating filter)
    #[arg(long = "min-rating", value_name = "STARS")]
    pub min_rating: Option<f64>,

    /// Exact price level, 0 (free) to 4 (very expensive)
    #[arg(long = "price", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=4))]
    pub price: Option<u8>,

    /// Only places open right now
    #[arg(long = "open-now")]
    pub open_now: bool,

    /// Order of results
    #[arg(short = 's', long = "sort", value_name = "KEY", default_value_t = SortKey::Distance)]
    pub sort: SortKey,

    /// Page to show (clamped to the available pages)
    #[arg(short = 'p', long = "page", default_value_t = 1)]
    pub page: usize,

    #[command(flatten)]
    pub provider: ProviderArgs,
}

/// Favorites subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum FavCommands {
    /// Add a place to favorites
    Add {
        /// Place id
        id: String,

        #[command(flatten)]
        provider: ProviderArgs,
    },

    /// Remove a place from favorites
    #[command(visible_alias = "rm")]
    Remove {
        /// Place id
        id: String,
    },

    /// Add the place if it is not a favorite, remove it otherwise
    Toggle {
        /// Place id
        id: String,

        #[command(flatten)]
        provider: ProviderArgs,
    },

    /// List favorites
    #[command(visible_alias = "ls")]
    List,

    /// Remove all favorites
    Clear {
        /// Skip confirmation prompt
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
}

/// Saved location subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum LocationCommands {
    /// Save a location under a label (moves an existing label to the front)
    Set {
        /// Label, e.g. "Home"
        label: String,

        #[arg(allow_negative_numbers = true)]
        lat: f64,

        #[arg(allow_negative_numbers = true)]
        lng: f64,
    },

    /// List saved locations, most recent first
    #[command(visible_alias = "ls")]
    List,

    /// Forget all saved locations
    Clear,
}

/// Search history subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum HistoryCommands {
    /// List recent search terms, most recent first
    #[command(visible_alias = "ls")]
    List,

    /// Recent search terms containing INPUT
    Suggest {
        input: String,

        /// Maximum number of suggestions
        #[arg(short = 'n', long = "limit", default_value_t = 5)]
        limit: usize,
    },

    /// Forget all search terms
    Clear,
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,

    /// Print the path of the config file
    Path,
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "nearby")]
#[command(about = "Find, rank and bookmark places near a location", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Use this config file instead of the default
    #[arg(long = "config", global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Search for places and print one page of results
    #[command(visible_alias = "s")]
    Search(SearchArgs),

    /// Show details of a place
    #[command(visible_alias = "d")]
    Details {
        /// Place id
        id: String,

        #[command(flatten)]
        provider: ProviderArgs,
    },

    /// Manage favorites
    #[command(visible_alias = "f")]
    Fav {
        #[command(subcommand)]
        command: FavCommands,
    },

    /// Manage saved locations
    #[command(visible_alias = "loc")]
    Location {
        #[command(subcommand)]
        command: LocationCommands,
    },

    /// Recent search terms
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_defaults() {
        let cli = Cli::parse_from(["nearby", "search"]);
        let Commands::Search(args) = cli.command else {
            panic!("Expected Search command");
        };
        assert!(args.query.is_none());
        assert_eq!(args.sort, SortKey::Distance);
        assert_eq!(args.page, 1);
        assert!(!args.open_now);
    }

    #[test]
    fn test_parse_search_with_filters() {
        let cli = Cli::parse_from([
            "nearby", "search", "pizza", "-c", "restaurant", "--lat", "12.97", "--lng", "-77.59",
            "-r", "2000", "--min-rating", "4", "--price", "2", "--open-now", "-s", "popularity",
            "-p", "3", "--places", "places.json",
        ]);
        let Commands::Search(args) = &cli.command else {
            panic!("Expected Search command");
        };
        assert_eq!(args.query.as_deref(), Some("pizza"));
        assert_eq!(args.category, Some(Category::Restaurant));
        assert_eq!(args.lat, Some(12.97));
        assert_eq!(args.lng, Some(-77.59));
        assert_eq!(args.radius, Some(2000));
        assert_eq!(args.min_rating, Some(4.0));
        assert_eq!(args.price, Some(2));
        assert!(args.open_now);
        assert_eq!(args.sort, SortKey::Popularity);
        assert_eq!(args.page, 3);
        assert_eq!(args.provider.places, Some(PathBuf::from("places.json")));
    }

    #[test]
    fn test_lat_requires_lng() {
        assert!(Cli::try_parse_from(["nearby", "search", "--lat", "1.0"]).is_err());
    }

    #[test]
    fn test_at_conflicts_with_coordinates() {
        let result = Cli::try_parse_from(["nearby", "search", "--at", "Home", "--lat", "1", "--lng", "2"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_price_out_of_range() {
        assert!(Cli::try_parse_from(["nearby", "search", "--price", "5"]).is_err());
    }

    #[test]
    fn test_unknown_sort_key() {
        assert!(Cli::try_parse_from(["nearby", "search", "--sort", "name"]).is_err());
    }

    #[test]
    fn test_parse_fav_commands() {
        let cli = Cli::parse_from(["nearby", "fav", "toggle", "p1", "--places", "a.json"]);
        let Commands::Fav { command: FavCommands::Toggle { id, provider } } = cli.command else {
            panic!("Expected Fav Toggle command");
        };
        assert_eq!(id, "p1");
        assert_eq!(provider.places, Some(PathBuf::from("a.json")));

        let cli = Cli::parse_from(["nearby", "fav", "rm", "p1"]);
        assert!(matches!(cli.command, Commands::Fav { command: FavCommands::Remove { .. } }));
    }

    #[test]
    fn test_parse_location_set_negative() {
        let cli = Cli::parse_from(["nearby", "location", "set", "Lima", "-12.05", "-77.04"]);
        let Commands::Location { command: LocationCommands::Set { label, lat, lng } } = cli.command else {
            panic!("Expected Location Set command");
        };
        assert_eq!(label, "Lima");
        assert_eq!(lat, -12.05);
        assert_eq!(lng, -77.04);
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["nearby", "history", "list", "-q", "-vv", "--config", "c.toml"]);
        assert!(cli.quiet);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
    }
}

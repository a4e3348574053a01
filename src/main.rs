//! Nearby CLI application entry point
//!
//! Ranks places from a JSON places file around a location, and keeps
//! favorites, saved locations and recent searches in an embedded database.
//!
//! # Usage
//!
//! ```bash
//! # Nearest places around the last saved location (or the default centre)
//! nearby search --places places.json
//!
//! # Open cafes rated 4+ within 2km of a point, best rated first
//! nearby search coffee -c cafe --lat 12.97 --lng 77.59 -r 2000 \
//!     --min-rating 4 --open-now --sort rating
//!
//! # Second page of results around a saved location
//! nearby search --at Home --page 2
//!
//! # Favorites
//! nearby fav toggle <PLACE_ID>
//! nearby fav list
//!
//! # Quiet mode (only output results)
//! nearby -q history suggest pi
//! ```
//!
//! # Configuration
//!
//! On first run, nearby prompts for initial setup. Configuration is stored in
//! the user's config directory (`~/.config/nearby/config.toml` on Linux).

use clap::CommandFactory;
use nearby::{
    NearbyError,
    cli::{Cli, Commands},
    commands,
    config::NearbyConfig,
    logging,
    storage::{KeyValueStore, SledStore},
};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

type Result<T> = std::result::Result<T, NearbyError>;

/// Load the config from `--config` if given, otherwise from the default
/// location (running first-time setup when it does not exist yet)
fn load_config(cli: &Cli) -> Result<(NearbyConfig, PathBuf)> {
    if let Some(path) = &cli.config {
        return Ok((NearbyConfig::load_from(path)?, path.clone()));
    }

    let path = NearbyConfig::config_path()?;
    let config = if cli.quiet {
        NearbyConfig::load_from(&path)?
    } else {
        NearbyConfig::load_or_setup()?
    };
    Ok((config, path))
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    if let Commands::Completions { shell } = &cli.command {
        clap_complete::generate(*shell, &mut Cli::command(), "nearby", &mut io::stdout());
        return Ok(());
    }

    let (config, config_path) = load_config(&cli)?;

    let level = logging::level_for_verbosity(config.log_level.into(), cli.verbose);
    logging::init_logger(level)?;

    let quiet = cli.quiet || config.quiet;
    let command = &cli.command;

    if let Commands::Config { command } = command {
        return commands::config(command, &config, &config_path, quiet);
    }

    let db_path = config.database_path()?;
    let backend: Arc<dyn KeyValueStore> = Arc::new(SledStore::open(&db_path)?);
    log::debug!("Using database at {}", db_path.display());

    match command {
        Commands::Search(args) => commands::search(args, &config, backend, quiet)?,
        Commands::Details { id, provider } => {
            commands::details(id, provider.places.as_deref(), &config, backend, quiet)?;
        }
        Commands::Fav { command } => commands::favorites(command, &config, backend, quiet)?,
        Commands::Location { command } => commands::location(command, &config, backend, quiet)?,
        Commands::History { command } => commands::history(command, &config, backend, quiet)?,
        Commands::Config { .. } | Commands::Completions { .. } => unreachable!(),
    }

    Ok(())
}

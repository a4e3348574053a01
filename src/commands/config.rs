//! Config command - show the effective configuration

use crate::{NearbyError, cli::ConfigCommands, config::NearbyConfig};
use std::path::Path;

type Result<T> = std::result::Result<T, NearbyError>;

/// Execute a config subcommand
///
/// `config_path` is the file the configuration was loaded from.
pub fn execute(command: &ConfigCommands, config: &NearbyConfig, config_path: &Path, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            if !quiet {
                println!("# {}", config_path.display());
                println!("# database: {}\n", config.database_path()?.display());
            }
            print!("{}", config.to_toml()?);
        }
        ConfigCommands::Path => println!("{}", config_path.display()),
    }
    Ok(())
}

//! History command - recent search terms and suggestions

use crate::{
    NearbyError,
    cli::HistoryCommands,
    config::NearbyConfig,
    recent::RecentSearches,
    storage::KeyValueStore,
};
use std::sync::Arc;

type Result<T> = std::result::Result<T, NearbyError>;

/// Execute a history subcommand
pub fn execute(
    command: &HistoryCommands,
    config: &NearbyConfig,
    backend: Arc<dyn KeyValueStore>,
    quiet: bool,
) -> Result<()> {
    let searches = RecentSearches::searches(backend, config.recent_searches_capacity);

    match command {
        HistoryCommands::List => print_terms(&searches.list(), "Recent searches:", "No recent searches.", quiet),
        HistoryCommands::Suggest { input, limit } => {
            print_terms(&searches.suggestions(input, *limit), "Suggestions:", "No suggestions.", quiet);
        }
        HistoryCommands::Clear => {
            searches.clear();
            if !quiet {
                println!("Search history cleared.");
            }
        }
    }

    Ok(())
}

fn print_terms(terms: &[String], header: &str, empty: &str, quiet: bool) {
    if terms.is_empty() {
        if !quiet {
            println!("{empty}");
        }
        return;
    }

    if !quiet {
        println!("{header}");
    }
    for term in terms {
        if quiet {
            println!("{term}");
        } else {
            println!("  {term}");
        }
    }
}

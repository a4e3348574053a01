//! Logger initialization
//!
//! Library code logs through the `log` facade. The binary installs an
//! `env_logger` backend with colored level labels.

use colored::Colorize;
use log::LevelFilter;
use std::io::Write;

/// Initialize the logger
///
/// `RUST_LOG` is read first; `level` then sets the level for this crate,
/// so `RUST_LOG=sled=debug` can still raise a dependency's verbosity.
///
/// # Errors
///
/// Returns `SetLoggerError` if a logger is already installed.
pub fn init_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_module("nearby", level);
    builder.filter_module("sled", LevelFilter::Warn);

    builder.format(|buf, record| {
        let level = record.level();
        let label = match level {
            log::Level::Error => level.as_str().red(),
            log::Level::Warn => level.as_str().yellow(),
            log::Level::Info => level.as_str().green(),
            log::Level::Debug => level.as_str().blue(),
            log::Level::Trace => level.as_str().purple(),
        };

        writeln!(buf, "[{label}] {}", record.args())
    });

    builder.try_init()
}

/// Level for the `-v` count given on the command line, on top of `base`
#[must_use]
pub fn level_for_verbosity(base: LevelFilter, verbose: u8) -> LevelFilter {
    match verbose {
        0 => base,
        1 => base.max(LevelFilter::Info),
        2 => base.max(LevelFilter::Debug),
        _ => LevelFilter::Trace,
    }
}

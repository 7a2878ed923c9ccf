//! Application configuration.
//!
//! Resolved once at startup from the command line, the environment and the
//! platform's standard directories.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::Cli;

/// Directory name used under the platform data directory.
pub const APP_DIR_NAME: &str = "pomotimer";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "POMOTIMER_DATA_DIR";

/// Settings for one run of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where settings and the session count are stored
    pub data_dir: PathBuf,
    /// Whether to play the finish tone
    pub sound: bool,
    /// Whether to send desktop notifications
    pub notifications: bool,
}

impl AppConfig {
    /// Builds the configuration from parsed arguments.
    ///
    /// The data directory is taken from `--data-dir`, then from
    /// `POMOTIMER_DATA_DIR`, then from the platform data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no data directory can be determined.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let env_dir = std::env::var_os(DATA_DIR_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        let data_dir = cli
            .data_dir
            .clone()
            .or(env_dir)
            .or_else(default_data_dir)
            .context("Could not determine a data directory; pass --data-dir")?;

        Ok(Self {
            data_dir,
            sound: !cli.no_sound,
            notifications: !cli.no_notify,
        })
    }
}

/// Returns `<platform data dir>/pomotimer`, if the platform has one.
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR_NAME))
}

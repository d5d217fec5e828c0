//! Log output setup
//!
//! The trainer owns the terminal, so log events go to a file. Nothing is
//! installed unless a log file was configured.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use once_cell::sync::OnceCell;
use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::{Result, TrainerError};

/// Environment variable naming a log file; overrides the config file
pub const LOG_ENV: &str = "REGEX_TRAINER_LOG";

static TELEMETRY_GUARD: OnceCell<Option<PathBuf>> = OnceCell::new();

/// Install the global subscriber on first call.
///
/// Later calls return the path chosen by the first one without touching
/// global state.
pub fn initialise(config: &Config) -> Result<Option<PathBuf>> {
    TELEMETRY_GUARD
        .get_or_try_init(|| {
            let path = std::env::var_os(LOG_ENV)
                .map(PathBuf::from)
                .or_else(|| config.log_file.clone());
            match path {
                Some(path) => install_subscriber(&path, &config.log_filter).map(|_| Some(path)),
                None => Ok(None),
            }
        })
        .cloned()
}

fn install_subscriber(path: &Path, filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter)
        .map_err(|error| TrainerError::Telemetry(format!("invalid log filter: {}", error)))?;
    let file = open_log(path)?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|error| TrainerError::Telemetry(error.to_string()))
}

fn open_log(path: &Path) -> Result<File> {
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

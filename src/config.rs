//! Configuration file support
//!
//! Loads settings from ~/.regex-trainer.toml (or %USERPROFILE%\.regex-trainer.toml
//! on Windows). Every key is optional.
//!
//! Example:
//! ```toml
//! # regex-trainer configuration
//! default-flags = "gi"
//! start-tab = "playground"
//! show-groups = true
//! match-color = "yellow"
//! log-file = "/tmp/regex-trainer.log"
//! log-filter = "regex_trainer=debug"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::app::Tab;
use crate::error::{Result, TrainerError};
use crate::style::Color;

const CONFIG_FILE: &str = ".regex-trainer.toml";

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Flags the pattern starts with
    pub default_flags: String,
    /// Tab shown on startup
    pub start_tab: Tab,
    /// Whether to list capturing groups under the results
    pub show_groups: bool,
    /// Background colour for matched text
    pub match_color: Color,
    /// File that receives log output
    pub log_file: Option<PathBuf>,
    /// Log filter directive, `EnvFilter` syntax
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_flags: "g".to_string(),
            start_tab: Tab::Learn,
            show_groups: true,
            match_color: Color::Yellow,
            log_file: None,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE))
        }
    }

    /// Load configuration from the default location.
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents).map_err(|source| TrainerError::Config {
                path: path.to_path_buf(),
                source,
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Parse config file contents
    fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

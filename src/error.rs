//! Error types for the trainer

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for trainer operations
pub type Result<T> = std::result::Result<T, TrainerError>;

/// Application-level error types
#[derive(Error, Debug)]
pub enum TrainerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("Logging setup failed: {0}")]
    Telemetry(String),
}

/// A pattern/flag combination the regex engine refused.
///
/// The message is the engine's diagnostic, passed through untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct PatternError {
    pub message: String,
}

impl PatternError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<regress::Error> for PatternError {
    fn from(err: regress::Error) -> Self {
        Self::new(err.text)
    }
}

//! Errors surfaced by the application layer.

use std::path::PathBuf;

use thiserror::Error;

use skyward_core::error::SetupError;

/// Failure to load a session configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] SetupError),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("battle setup rejected: {0}")]
    Setup(#[from] SetupError),

    #[error("failed to spawn tick driver thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("tick driver is already running")]
    AlreadyRunning,

    #[error("tick driver is not running")]
    DriverStopped,

    #[error("tick driver panicked")]
    DriverPanicked,

    #[error("shared state lock poisoned")]
    Poisoned,
}

use std::path::PathBuf;

use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("`{command}` failed:\n{stderr}")]
    GitCommandFailed { command: String, stderr: String },

    #[error("No local branches to switch to")]
    NoBranches,

    #[error("sgb needs an interactive terminal to pick a branch")]
    InteractiveRequired,

    #[error("Interactive prompt required but no controlling terminal is available")]
    NonInteractive,

    #[error("Selector error: {message}")]
    Selector { message: String },

    #[error("Failed to parse config {}: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for this crate.
pub(crate) type Result<T> = std::result::Result<T, Error>;

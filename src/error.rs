//! Errors from the ambient layers (configuration and stdout).
//!
//! The greeter operations themselves are total and never fail.

use config::ConfigError;
use thiserror::Error;

/// Errors that can stop a run.
#[derive(Debug, Error)]
pub enum AppError {
    /// An explicitly requested configuration file does not exist.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// The configuration file path is not valid UTF-8.
    #[error("invalid configuration path: {0}")]
    InvalidPath(String),

    /// The configuration could not be parsed or deserialized.
    #[error("failed to parse configuration: {0}")]
    Config(#[from] ConfigError),

    /// Writing to stdout failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// True when the reader of stdout went away before we finished.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, AppError::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

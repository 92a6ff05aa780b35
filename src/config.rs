//! Runtime configuration.
//!
//! Only logging is configurable; nothing here changes what the build report
//! prints. Settings come from an optional TOML file and from environment
//! variables of the form `PIPELINE_DEMO__<KEY>` (e.g. `PIPELINE_DEMO__LOG_LEVEL=debug`).

use std::path::Path;

use config::{Config, Environment, File, FileFormat, FileSourceFile};
use serde::Deserialize;

use crate::error::AppError;
use crate::logging::LogLevel;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "pipeline-demo.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "PIPELINE_DEMO";

fn default_log_timestamps() -> bool {
    true
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Log level used when neither `RUST_LOG` nor `-v` is given
    #[serde(default)]
    pub log_level: Option<LogLevel>,
    /// Whether log lines carry a timestamp
    #[serde(default = "default_log_timestamps")]
    pub log_timestamps: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: None,
            log_timestamps: default_log_timestamps(),
        }
    }
}

impl AppConfig {
    /// Load configuration.
    ///
    /// With `Some(path)` the file must exist. With `None`,
    /// [`DEFAULT_CONFIG_FILE`] is read if present in the working directory.
    /// Environment overrides apply in both cases.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The explicit configuration file does not exist
    /// - The path is not valid UTF-8
    /// - The file or an override cannot be parsed
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let file = match path {
            Some(path) => {
                let path_str = path
                    .to_str()
                    .ok_or_else(|| AppError::InvalidPath(format!("{:?}", path)))?;

                if !path.exists() {
                    return Err(AppError::ConfigNotFound(path_str.to_string()));
                }

                File::with_name(path_str)
            }
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        Self::from_sources(file, default_environment())
    }

    fn from_sources(
        file: File<FileSourceFile, FileFormat>,
        environment: Environment,
    ) -> Result<Self, AppError> {
        let config = Config::builder()
            .add_source(file)
            .add_source(environment)
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

fn default_environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

//! Error types for configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading or validating a configuration file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML or has unknown or mistyped keys.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value is well-formed but out of range.
    #[error("invalid config value for {field}: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

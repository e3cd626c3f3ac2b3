//! TOML configuration for the saju engine and CLI.
//!
//! ```toml
//! log_level = "info"
//!
//! [engine]
//! zi_hour = "same-day"   # or "next-day"
//!
//! [query]
//! max_range_days = 366
//!
//! [display]
//! script = "both"        # "hangul", "hanja", or "both"
//! ```
//!
//! Every key is optional and unknown keys are rejected. With no config
//! path the defaults apply; a path that cannot be read is an error.

pub mod error;

use std::path::Path;

use saju_base::Script;
use saju_engine::{DEFAULT_MAX_RANGE_DAYS, EngineOptions, ZiHourRule};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use error::ConfigError;

/// Upper bound accepted for `query.max_range_days` (about ten years).
pub const MAX_RANGE_DAYS_LIMIT: u32 = 3660;

/// `[engine]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineSection {
    pub zi_hour: ZiHourRule,
}

/// `[query]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuerySection {
    pub max_range_days: u32,
}

impl Default for QuerySection {
    fn default() -> Self {
        Self {
            max_range_days: DEFAULT_MAX_RANGE_DAYS,
        }
    }
}

/// `[display]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplaySection {
    pub script: Script,
}

/// Whole configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SajuConfig {
    /// Tracing filter directive, e.g. `info` or `saju_engine=debug`.
    pub log_level: Option<String>,
    pub engine: EngineSection,
    pub query: QuerySection,
    pub display: DisplaySection,
}

impl SajuConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    ///
    /// # Errors
    /// `Io` if the file cannot be read (including when it does not exist),
    /// `Parse` or `Invalid` for bad contents.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading config");
        Self::from_toml_str(&text)
    }

    /// [`load`](Self::load) when a path is given, defaults otherwise.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("no config path, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_RANGE_DAYS_LIMIT).contains(&self.query.max_range_days) {
            return Err(ConfigError::Invalid {
                field: "query.max_range_days",
                message: format!(
                    "{} is outside 1..={MAX_RANGE_DAYS_LIMIT}",
                    self.query.max_range_days
                ),
            });
        }
        if let Some(level) = &self.log_level {
            if level.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    field: "log_level",
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Engine options selected by this config.
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            zi_hour: self.engine.zi_hour,
            max_range_days: self.query.max_range_days,
        }
    }
}

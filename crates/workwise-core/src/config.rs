//! WorkWise configuration
//!
//! Timing knobs for the simulated suggestion latency and the success notice,
//! plus the default log filter used by the CLI. Loaded from TOML; every
//! field is optional.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// WorkWise configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkwiseConfig {
    /// Simulated suggestion engine latency in milliseconds
    pub suggestion_delay_ms: u64,
    /// How long the assignment success notice stays visible
    pub notice_duration_ms: u64,
    /// `tracing` filter used when `RUST_LOG` is unset
    pub default_log_filter: String,
}

impl WorkwiseConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With suggestion latency
    #[inline]
    #[must_use]
    pub fn with_suggestion_delay(mut self, delay: Duration) -> Self {
        self.suggestion_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// With notice display duration
    #[inline]
    #[must_use]
    pub fn with_notice_duration(mut self, duration: Duration) -> Self {
        self.notice_duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Suggestion latency
    #[inline]
    #[must_use]
    pub fn suggestion_delay(&self) -> Duration {
        Duration::from_millis(self.suggestion_delay_ms)
    }

    /// Notice display duration
    #[inline]
    #[must_use]
    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    /// - `ConfigError::Parse` if the text is not valid TOML for this struct
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// - `ConfigError::Read` if the file cannot be read
    /// - `ConfigError::Parse` if it is not valid TOML for this struct
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}

impl Default for WorkwiseConfig {
    fn default() -> Self {
        Self {
            suggestion_delay_ms: 2000,
            notice_duration_ms: 3000,
            default_log_filter: "info".to_string(),
        }
    }
}

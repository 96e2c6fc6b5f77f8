// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::name_generator::DelayPolicy;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub attempts: usize,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self { attempts: 3 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DelayConfig {
    pub max_ms: u64,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self { max_ms: 1000 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Settings for the movie services and the demo binary.
///
/// Missing sections and keys fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MoviesConfig {
    pub retry: RetryConfig,
    pub delay: DelayConfig,
    pub logging: LoggingConfig,
}

impl MoviesConfig {
    /// Load configuration from embedded TOML file
    pub fn load() -> Result<Self, ConfigError> {
        let config_str = include_str!("../config.toml");
        Self::from_toml_str(config_str)
    }

    pub fn from_toml_str(config_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(config_str)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let config_str = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&config_str)
    }

    /// The override file when given, the embedded defaults otherwise.
    pub fn load_with_override(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::load(),
        }
    }

    pub fn delay_policy(&self) -> DelayPolicy {
        DelayPolicy::Random {
            max: Duration::from_millis(self.delay.max_ms),
        }
    }
}

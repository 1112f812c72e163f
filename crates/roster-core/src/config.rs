//! Configuration for the registry process.
//!
//! TOML file with three optional sections; everything has a default.
//!
//! ```toml
//! [store]
//! backend = "file"
//! path = "./roster.json"
//!
//! [identity]
//! principal = "anonymous"
//!
//! [logging]
//! level = "info"
//! json_format = false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logging::{LogConfig, LogLevel};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Main process configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub store: StoreConfig,
    pub identity: IdentityConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Memory,
    #[default]
    File,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: StoreBackend,

    /// Data file for the `file` backend.
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::File,
            path: PathBuf::from("./roster.json"),
        }
    }
}

/// Identity recorded as `lecturerId` on records created by this process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    pub principal: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            principal: "anonymous".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// trace, debug, info, warn, error
    pub level: String,
    pub json_format: bool,
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            with_target: true,
        }
    }
}

impl LoggingConfig {
    /// Resolve into a subscriber config. Unknown levels fall back to info.
    pub fn to_log_config(&self) -> LogConfig {
        let level = LogLevel::parse(&self.level).unwrap_or_default();
        LogConfig::new(level)
            .json_format(self.json_format)
            .with_target(self.with_target)
    }
}

impl RegistryConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.identity.principal.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "identity.principal must not be empty".to_string(),
            ));
        }
        if self.store.backend == StoreBackend::File && self.store.path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "store.path is required for the file backend".to_string(),
            ));
        }
        if LogLevel::parse(&self.logging.level).is_none() {
            return Err(ConfigError::Invalid(format!(
                "unknown logging.level '{}'",
                self.logging.level
            )));
        }
        Ok(())
    }
}

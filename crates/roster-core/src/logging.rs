//! Logging - tracing subscriber の初期化
//!
//! `RUST_LOG` が設定されていればそちらを優先し、無ければ LogConfig の level を使います。

use std::fmt;

use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt as tracing_fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to initialize logging: {0}")]
    InitializationFailed(String),
}

/// Minimum severity to emit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LogLevel,
    pub with_target: bool,
    pub json_format: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            with_target: true,
            json_format: false,
        }
    }
}

impl LogConfig {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    pub fn with_target(mut self, enabled: bool) -> Self {
        self.with_target = enabled;
        self
    }

    pub fn json_format(mut self, enabled: bool) -> Self {
        self.json_format = enabled;
        self
    }
}

/// Install the global subscriber. Fails if one is already installed.
///
/// Logs go to stderr so stdout stays clean for command output.
pub fn init_logging_with_config(config: &LogConfig) -> Result<(), LoggingError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let fmt_layer = tracing_fmt::layer()
        .with_target(config.with_target)
        .with_writer(std::io::stderr);

    let result = if config.json_format {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
    };
    result.map_err(|e| LoggingError::InitializationFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("trace", LogLevel::Trace)]
    #[case("DEBUG", LogLevel::Debug)]
    #[case("info", LogLevel::Info)]
    #[case("warning", LogLevel::Warn)]
    #[case("Error", LogLevel::Error)]
    fn parses_levels(#[case] input: &str, #[case] expected: LogLevel) {
        assert_eq!(LogLevel::parse(input), Some(expected));
        assert_eq!(LogLevel::parse(expected.as_str()), Some(expected));
    }

    #[test]
    fn unknown_level_is_none() {
        assert_eq!(LogLevel::parse("loud"), None);
    }

    #[test]
    fn builder_sets_flags() {
        let config = LogConfig::new(LogLevel::Debug)
            .with_target(false)
            .json_format(true);
        assert_eq!(config.level, LogLevel::Debug);
        assert!(!config.with_target);
        assert!(config.json_format);
    }

    #[test]
    fn second_init_fails() {
        let config = LogConfig::new(LogLevel::Warn);
        // The first call may already have lost to another test; only the
        // second outcome is deterministic.
        let _ = init_logging_with_config(&config);
        assert!(init_logging_with_config(&config).is_err());
    }
}

//! Configuration types for capgroup.
//!
//! [`MatcherConfig`] describes how patterns are compiled; [`LoggingConfig`]
//! is consumed by front-ends that install a `tracing` subscriber. Both can be
//! loaded from a file ([`file`]) and overridden from the environment
//! ([`env`]).

pub mod env;
pub mod file;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CompileError;
use crate::matcher::CaptureMatcher;
use crate::pattern::{CompileOptions, Dialect, Pattern};

pub use env::EnvConfig;
pub use file::{ConfigFormat, ConfigLoader};

/// Default log level filter.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How patterns are compiled.
    pub matcher: MatcherConfig,

    /// How diagnostics are logged.
    pub logging: LoggingConfig,
}

/// Configuration for compiling matchers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Pattern syntax.
    pub dialect: Dialect,

    /// Ignore case (`REG_ICASE`).
    pub case_insensitive: bool,

    /// Line-oriented matching (`REG_NEWLINE`).
    pub newline: bool,

    /// Fixed group capacity; `None` sizes matchers to their pattern.
    pub max_groups: Option<usize>,
}

impl MatcherConfig {
    /// Create a new matcher configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pattern syntax.
    #[must_use]
    pub const fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Set case-insensitive matching.
    #[must_use]
    pub const fn case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = enabled;
        self
    }

    /// Set line-oriented matching.
    #[must_use]
    pub const fn newline(mut self, enabled: bool) -> Self {
        self.newline = enabled;
        self
    }

    /// Set a fixed group capacity.
    #[must_use]
    pub const fn max_groups(mut self, max_groups: usize) -> Self {
        self.max_groups = Some(max_groups);
        self
    }

    /// The `regcomp`-style options this configuration selects.
    #[must_use]
    pub const fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            dialect: self.dialect,
            case_insensitive: self.case_insensitive,
            newline: self.newline,
        }
    }

    /// Compile `pattern` into a matcher.
    ///
    /// # Errors
    ///
    /// Returns a [`CompileError`] if the pattern is invalid or the configured
    /// capacity is 0.
    pub fn compile(&self, pattern: &str) -> Result<CaptureMatcher, CompileError> {
        if self.max_groups == Some(0) {
            return Err(CompileError::ZeroCapacity);
        }
        let pattern = Pattern::with_options(pattern, self.compile_options())?;
        match self.max_groups {
            Some(max_groups) => CaptureMatcher::with_capacity(pattern, max_groups),
            None => Ok(CaptureMatcher::from_pattern(pattern)),
        }
    }
}

/// Configuration for logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level filter (`trace`, `debug`, `info`, `warn`, `error`).
    /// `RUST_LOG` takes precedence when set.
    pub level: String,

    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the level filter.
    #[must_use]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Set the log format.
    #[must_use]
    pub const fn format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }
}

/// Log format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,

    /// Newline-delimited JSON.
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => f.write_str("pretty"),
            Self::Json => f.write_str("json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" | "ndjson" => Ok(Self::Json),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matcher_config_builder() {
        let config = MatcherConfig::new()
            .dialect(Dialect::Rust)
            .case_insensitive(true)
            .newline(true)
            .max_groups(8);

        assert_eq!(config.dialect, Dialect::Rust);
        assert!(config.case_insensitive);
        assert!(config.newline);
        assert_eq!(config.max_groups, Some(8));
    }

    #[test]
    fn matcher_config_compiles_with_capacity() {
        let matcher = MatcherConfig::new().max_groups(20).compile("^(a)$").unwrap();
        assert_eq!(matcher.max_groups(), 20);

        let matcher = MatcherConfig::new().compile("^(a)$").unwrap();
        assert_eq!(matcher.max_groups(), 2);
    }

    #[test]
    fn matcher_config_zero_capacity() {
        let result = MatcherConfig::new().max_groups(0).compile("a");
        assert!(matches!(result, Err(CompileError::ZeroCapacity)));
    }

    #[test]
    fn matcher_config_applies_flags() {
        let mut matcher = MatcherConfig::new()
            .case_insensitive(true)
            .compile("^(ins)([acgt]+)$")
            .unwrap();
        let groups = matcher.matches("INSAA").unwrap();
        assert_eq!(groups.extract(2).as_deref(), Some("AA"));
    }

    #[test]
    fn logging_config_defaults() {
        let config = LoggingConfig::new();
        assert_eq!(config.level, "warn");
        assert_eq!(config.format, LogFormat::Pretty);

        let config = config.level("debug").format(LogFormat::Json);
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn log_format_parsing() {
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("Pretty".parse::<LogFormat>(), Ok(LogFormat::Pretty));
        assert!("xml".parse::<LogFormat>().is_err());
    }
}

//! Environment-based configuration.

use std::collections::HashMap;

use super::{Config, LogFormat};
use crate::error::{Error, Result};
use crate::pattern::Dialect;

/// Environment configuration prefix.
pub const DEFAULT_PREFIX: &str = "CAPGROUP";

/// Recognised variable names, without the prefix.
pub mod vars {
    /// Pattern dialect (`ere` or `rust`).
    pub const DIALECT: &str = "DIALECT";
    /// Fixed group capacity.
    pub const MAX_GROUPS: &str = "MAX_GROUPS";
    /// Case-insensitive matching.
    pub const IGNORE_CASE: &str = "IGNORE_CASE";
    /// Line-oriented matching.
    pub const NEWLINE: &str = "NEWLINE";
    /// Log level filter.
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    /// Log format (`pretty` or `json`).
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}

/// A snapshot of prefixed environment variables.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Prefix for environment variables.
    prefix: String,
    /// Values keyed by full variable name.
    cache: HashMap<String, String>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl EnvConfig {
    /// Capture the current process environment under `prefix`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::from_vars(prefix, std::env::vars())
    }

    /// Build from explicit `(name, value)` pairs, e.g. in tests.
    #[must_use]
    pub fn from_vars<I, K, V>(prefix: impl Into<String>, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let prefix = prefix.into().to_uppercase();
        let marker = format!("{prefix}_");
        let cache = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| prefix.is_empty() || k.starts_with(&marker))
            .collect();
        Self { prefix, cache }
    }

    /// Build the full environment variable name.
    fn var_name(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_uppercase()
        } else {
            format!("{}_{}", self.prefix, name.to_uppercase())
        }
    }

    /// Get a string value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.cache.get(&self.var_name(name)).map(String::as_str)
    }

    /// Get a parsed value.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the variable if it is set but
    /// does not parse.
    pub fn parse<T>(&self, name: &str) -> Result<Option<T>>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        self.get(name)
            .map(|raw| {
                raw.trim().parse::<T>().map_err(|e| {
                    Error::config(format!("{}={raw:?}: {e}", self.var_name(name)))
                })
            })
            .transpose()
    }

    /// Get a boolean value.
    #[must_use]
    pub fn bool(&self, name: &str) -> Option<bool> {
        self.get(name).map(|v| {
            matches!(
                v.to_lowercase().as_str(),
                "1" | "true" | "yes" | "on" | "enabled"
            )
        })
    }

    /// Check if a variable is set.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Overlay every recognised variable onto `config`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a variable has an invalid value.
    pub fn apply(&self, config: &mut Config) -> Result<()> {
        if let Some(dialect) = self.parse::<Dialect>(vars::DIALECT)? {
            config.matcher.dialect = dialect;
        }
        if let Some(max_groups) = self.parse::<usize>(vars::MAX_GROUPS)? {
            config.matcher.max_groups = Some(max_groups);
        }
        if let Some(enabled) = self.bool(vars::IGNORE_CASE) {
            config.matcher.case_insensitive = enabled;
        }
        if let Some(enabled) = self.bool(vars::NEWLINE) {
            config.matcher.newline = enabled;
        }
        if let Some(level) = self.get(vars::LOG_LEVEL) {
            config.logging.level = level.to_string();
        }
        if let Some(format) = self.parse::<LogFormat>(vars::LOG_FORMAT)? {
            config.logging.format = format;
        }
        Ok(())
    }
}

/// Get the home directory.
#[must_use]
pub fn home_dir() -> Option<std::path::PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(std::path::PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> EnvConfig {
        EnvConfig::from_vars("capgroup", pairs.iter().copied())
    }

    #[test]
    fn env_config_prefix() {
        let config = env(&[]);
        assert_eq!(config.var_name("foo"), "CAPGROUP_FOO");
        assert_eq!(config.var_name("bar_baz"), "CAPGROUP_BAR_BAZ");
    }

    #[test]
    fn env_config_no_prefix() {
        let config = EnvConfig::from_vars("", [("FOO", "1")]);
        assert_eq!(config.var_name("foo"), "FOO");
        assert_eq!(config.get("foo"), Some("1"));
    }

    #[test]
    fn unrelated_variables_are_dropped() {
        let config = env(&[("PATH", "/bin"), ("CAPGROUP_DIALECT", "rust")]);
        assert!(config.is_set("dialect"));
        assert!(config.cache.get("PATH").is_none());
    }

    #[test]
    fn env_bool_parsing() {
        let config = env(&[("CAPGROUP_ENABLED", "true"), ("CAPGROUP_DISABLED", "false")]);
        assert_eq!(config.bool("ENABLED"), Some(true));
        assert_eq!(config.bool("DISABLED"), Some(false));
        assert_eq!(config.bool("MISSING"), None);
    }

    #[test]
    fn apply_overrides() {
        let config = env(&[
            ("CAPGROUP_DIALECT", "rust"),
            ("CAPGROUP_MAX_GROUPS", "20"),
            ("CAPGROUP_IGNORE_CASE", "yes"),
            ("CAPGROUP_LOG_LEVEL", "debug"),
            ("CAPGROUP_LOG_FORMAT", "json"),
        ]);
        let mut target = Config::default();
        config.apply(&mut target).unwrap();

        assert_eq!(target.matcher.dialect, Dialect::Rust);
        assert_eq!(target.matcher.max_groups, Some(20));
        assert!(target.matcher.case_insensitive);
        assert!(!target.matcher.newline);
        assert_eq!(target.logging.level, "debug");
        assert_eq!(target.logging.format, LogFormat::Json);
    }

    #[test]
    fn apply_rejects_bad_values() {
        let config = env(&[("CAPGROUP_MAX_GROUPS", "many")]);
        let err = config.apply(&mut Config::default()).unwrap_err();
        assert!(err.to_string().contains("CAPGROUP_MAX_GROUPS"));
    }
}

//! File-based configuration loading.

use std::path::{Path, PathBuf};

use super::Config;
use crate::error::{Error, Result};

/// Default configuration file stem.
pub const DEFAULT_FILE_NAME: &str = "capgroup";

/// Configuration file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML format.
    Toml,
    /// JSON format.
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Detect format from path.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    const fn extension(self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }
}

/// Parse configuration text.
///
/// # Errors
///
/// Returns the parser's error if the text is malformed.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<Config> {
    match format {
        ConfigFormat::Toml => Ok(toml::from_str(content)?),
        ConfigFormat::Json => Ok(serde_json::from_str(content)?),
    }
}

/// Configuration file loader.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Search paths.
    search_paths: Vec<PathBuf>,
    /// Format for files without a recognised extension.
    default_format: Option<ConfigFormat>,
}

impl ConfigLoader {
    /// Create a new loader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a search path.
    #[must_use]
    pub fn add_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.search_paths.push(path.into());
        self
    }

    /// Set default format.
    #[must_use]
    pub const fn with_format(mut self, format: ConfigFormat) -> Self {
        self.default_format = Some(format);
        self
    }

    /// Find a config file by exact name or by stem plus a known extension.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<PathBuf> {
        self.search_paths.iter().find_map(|dir| {
            let exact = dir.join(name);
            if exact.is_file() {
                return Some(exact);
            }
            [ConfigFormat::Toml, ConfigFormat::Json]
                .into_iter()
                .map(|format| dir.join(format!("{name}.{}", format.extension())))
                .find(|path| path.is_file())
        })
    }

    /// Load a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, its format is unknown,
    /// or it does not parse.
    pub fn load(&self, path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path)?;

        let format = ConfigFormat::from_path(path)
            .or(self.default_format)
            .ok_or_else(|| {
                Error::config(format!("unknown config format: {}", path.display()))
            })?;

        let config = parse_config(&content, format)?;
        tracing::debug!(path = %path.display(), ?format, "loaded configuration");
        Ok(config)
    }

    /// Load by name from the search paths; `None` if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a file is found but cannot be loaded.
    pub fn load_by_name(&self, name: &str) -> Result<Option<Config>> {
        self.find(name).map(|path| self.load(&path)).transpose()
    }
}

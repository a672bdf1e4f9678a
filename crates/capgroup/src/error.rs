//! Error types for capgroup.
//!
//! Only pattern compilation and configuration loading can fail. A pattern
//! that does not match is not an error: matching returns `None`. Asking a
//! match for a group index beyond its capacity is a caller bug and panics.

use capgroup_syntax::SyntaxError;
use thiserror::Error;

/// A pattern could not be turned into a matcher.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The pattern is not valid POSIX ERE.
    #[error("invalid pattern '{pattern}': {source}")]
    Syntax {
        /// The pattern as written.
        pattern: String,
        /// What the ERE front-end rejected.
        #[source]
        source: SyntaxError,
    },

    /// The regex engine rejected the pattern.
    #[error("invalid pattern '{pattern}': {source}")]
    Regex {
        /// The pattern as written.
        pattern: String,
        /// The engine's error.
        #[source]
        source: regex::Error,
    },

    /// A matcher was asked to report zero groups.
    #[error("group capacity must be at least 1")]
    ZeroCapacity,
}

impl CompileError {
    /// The offending pattern, when there is one.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Self::Syntax { pattern, .. } | Self::Regex { pattern, .. } => Some(pattern),
            Self::ZeroCapacity => None,
        }
    }
}

/// The main error type for capgroup operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Pattern compilation failed.
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// Configuration is inconsistent or incomplete.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A TOML configuration file could not be parsed.
    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// A JSON configuration file could not be parsed.
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for capgroup operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether this error came from compiling a pattern.
    #[must_use]
    pub const fn is_compile(&self) -> bool {
        matches!(self, Self::Compile(_))
    }
}

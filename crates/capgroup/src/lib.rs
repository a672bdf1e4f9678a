//! capgroup: capture-group matching over POSIX extended regular expressions
//!
//! Compile an extended regular expression once, match it against inputs, and
//! pull numbered capture groups out as owned strings.
//!
//! # Features
//!
//! - **POSIX ERE syntax** lowered onto the `regex` engine via `capgroup-syntax`
//! - **Scoped ownership**: the compiled pattern and span buffer are released
//!   when the matcher is dropped
//! - **Exact sizing**: matchers report as many groups as the pattern defines,
//!   or a fixed capacity when asked
//! - **Borrow-checked results**: a [`Groups`] view cannot outlive its input or
//!   survive the next match
//! - **Compile-time validation** with the [`ere!`] macro
//!
//! # Example
//!
//! ```
//! use capgroup::CaptureMatcher;
//!
//! let mut matcher = CaptureMatcher::new(r"^(g\.)?([0-9]+)(_([0-9]+))?$")?;
//!
//! let groups = matcher.matches("g.123456_3432").expect("input matches");
//! assert_eq!(groups.extract(0).as_deref(), Some("g.123456_3432"));
//! assert_eq!(groups.extract(3).as_deref(), Some("_3432"));
//! assert_eq!(groups.extract(4).as_deref(), Some("3432"));
//!
//! assert!(matcher.matches("g.").is_none());
//! # Ok::<(), capgroup::CompileError>(())
//! ```

extern crate self as capgroup;

// Re-export macros
pub use capgroup_macros::ere;

pub mod config;
pub mod error;
pub mod groups;
pub mod matcher;
pub mod pattern;
pub mod prelude;

pub use config::{Config, ConfigFormat, ConfigLoader, EnvConfig, LogFormat, LoggingConfig, MatcherConfig};
pub use error::{CompileError, Error, Result};
pub use groups::{Groups, OwnedGroups, Span};
pub use matcher::{CaptureMatcher, is_match};
pub use pattern::{CompileOptions, Dialect, Pattern, PatternBuilder};

/// The ERE front-end, for callers that want to validate without compiling.
pub use capgroup_syntax as syntax;

//! Convenient re-exports.
//!
//! ```
//! use capgroup::prelude::*;
//!
//! let mut matcher = CaptureMatcher::new("^a(b)?c$")?;
//! assert!(matcher.matches("ac").is_some());
//! # Ok::<(), CompileError>(())
//! ```

pub use crate::config::{Config, MatcherConfig};
pub use crate::error::{CompileError, Error, Result};
pub use crate::groups::{Groups, OwnedGroups, Span};
pub use crate::matcher::CaptureMatcher;
pub use crate::pattern::{CompileOptions, Dialect, Pattern};
pub use crate::ere;

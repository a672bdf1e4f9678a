//! capgroup-syntax: POSIX extended regular expression front-end
//!
//! The `regex` crate speaks a Perl-flavoured dialect. POSIX ERE differs in a
//! handful of places that matter for real patterns: backslashes are literal
//! inside bracket expressions, a leading `]` is a member of the bracket, an
//! unmatched `)` is an ordinary character, and `(?` has no meaning at all.
//!
//! This crate validates ERE and lowers it into an equivalent `regex` crate
//! pattern, so the engine can be used as the ERE matcher.
//!
//! # Example
//!
//! ```
//! let lowered = capgroup_syntax::translate(r"^(g\.)?([[:digit:]]+)$").unwrap();
//! assert_eq!(lowered, r"^(g\.)?([[:digit:]]+)$");
//!
//! let lowered = capgroup_syntax::translate(r"[]\]").unwrap();
//! assert_eq!(lowered, r"[\]\\]");
//! ```

mod error;
mod translate;

pub use error::{SyntaxError, SyntaxErrorKind};
pub use translate::{Options, POSIX_CLASSES, translate, translate_with, validate};

//! capgroup-macros: Procedural macros for capgroup
//!
//! - [`ere!`] - Compile-time validated POSIX ERE patterns
//!
//! # Example
//!
//! ```ignore
//! use capgroup::{CaptureMatcher, ere};
//!
//! let mut matcher = CaptureMatcher::from_pattern(ere!(r"^(g\.)?([[:digit:]]+)$").clone());
//! ```

// In proc-macro crates, passing parsed input by value is idiomatic
#![allow(clippy::needless_pass_by_value)]

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod ere;

/// Compile-time validated ERE pattern.
///
/// Expands to a `&'static capgroup::Pattern` that is compiled on first use.
/// Patterns that are not valid ERE, or that the regex engine rejects, are
/// compilation errors.
///
/// # Examples
///
/// ```ignore
/// use capgroup::ere;
///
/// let hgvs = ere!(r"^(g\.)?([[:digit:]]+)(_([[:digit:]]+))?$");
/// assert_eq!(hgvs.group_count(), 5);
///
/// // Unterminated bracket - compilation error
/// // let bad = ere!("^[");
/// ```
#[proc_macro]
pub fn ere(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as ere::EreInput);
    ere::expand(input).into()
}

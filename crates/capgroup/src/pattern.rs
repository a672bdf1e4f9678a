//! Compiled patterns.
//!
//! A [`Pattern`] is the compiled form of a regular expression: produced once,
//! immutable afterwards, and cheap to share between matchers.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use regex::{CaptureLocations, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::CompileError;

/// The syntax a pattern is written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// POSIX extended regular expressions.
    #[default]
    #[serde(alias = "ere")]
    Extended,

    /// The `regex` crate's own syntax, passed through unchanged.
    Rust,
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Extended => f.write_str("ere"),
            Self::Rust => f.write_str("rust"),
        }
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ere" | "extended" | "posix" => Ok(Self::Extended),
            "rust" | "native" => Ok(Self::Rust),
            other => Err(format!("unknown dialect '{other}' (expected 'ere' or 'rust')")),
        }
    }
}

/// Compile-time flags, named after their `regcomp` counterparts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CompileOptions {
    /// Pattern syntax.
    pub dialect: Dialect,
    /// `REG_ICASE`: ignore case.
    pub case_insensitive: bool,
    /// `REG_NEWLINE`: `.` and non-matching brackets stop at `\n`, and `^`/`$`
    /// also match at line boundaries.
    pub newline: bool,
}

/// A compiled regular expression with its source pattern.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    options: CompileOptions,
    regex: Regex,
}

impl Pattern {
    /// Compile a POSIX ERE pattern with default options.
    ///
    /// # Errors
    ///
    /// Returns a [`CompileError`] if the pattern is invalid.
    pub fn new(source: &str) -> Result<Self, CompileError> {
        Self::with_options(source, CompileOptions::default())
    }

    /// Start building a pattern with non-default options.
    #[must_use]
    pub fn builder(source: impl Into<String>) -> PatternBuilder {
        PatternBuilder {
            source: source.into(),
            options: CompileOptions::default(),
        }
    }

    /// Compile a pattern with explicit options.
    ///
    /// # Errors
    ///
    /// Returns a [`CompileError`] if the pattern is invalid.
    pub fn with_options(source: &str, options: CompileOptions) -> Result<Self, CompileError> {
        let lowered = match options.dialect {
            Dialect::Extended => {
                let syntax = capgroup_syntax::Options {
                    newline: options.newline,
                };
                capgroup_syntax::translate_with(source, syntax)
                    .map(Cow::Owned)
                    .map_err(|source_err| CompileError::Syntax {
                        pattern: source.to_string(),
                        source: source_err,
                    })?
            }
            Dialect::Rust => Cow::Borrowed(source),
        };

        // regcomp semantics: without REG_NEWLINE the input is one line
        let regex = RegexBuilder::new(&lowered)
            .case_insensitive(options.case_insensitive)
            .multi_line(options.newline)
            .dot_matches_new_line(!options.newline)
            .build()
            .map_err(|source_err| CompileError::Regex {
                pattern: source.to_string(),
                source: source_err,
            })?;

        tracing::trace!(
            pattern = source,
            dialect = %options.dialect,
            groups = regex.captures_len(),
            "compiled pattern"
        );

        Ok(Self {
            source: source.to_string(),
            options,
            regex,
        })
    }

    /// Get the source pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Get the options the pattern was compiled with.
    #[must_use]
    pub const fn options(&self) -> CompileOptions {
        self.options
    }

    /// Get the pattern's dialect.
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.options.dialect
    }

    /// Number of groups the pattern defines, counting group 0.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.regex.captures_len()
    }

    /// Test for a match without recording any group spans.
    #[must_use]
    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    /// The underlying engine regex.
    #[must_use]
    pub const fn regex(&self) -> &Regex {
        &self.regex
    }

    pub(crate) fn capture_locations(&self) -> CaptureLocations {
        self.regex.capture_locations()
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("source", &self.source)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Pattern {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Pattern {
    type Error = CompileError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

/// Builder for [`Pattern`].
#[derive(Debug, Clone)]
pub struct PatternBuilder {
    source: String,
    options: CompileOptions,
}

impl PatternBuilder {
    /// Set the pattern syntax.
    #[must_use]
    pub const fn dialect(mut self, dialect: Dialect) -> Self {
        self.options.dialect = dialect;
        self
    }

    /// Ignore case when matching.
    #[must_use]
    pub const fn case_insensitive(mut self, enabled: bool) -> Self {
        self.options.case_insensitive = enabled;
        self
    }

    /// Treat the input as lines.
    #[must_use]
    pub const fn newline(mut self, enabled: bool) -> Self {
        self.options.newline = enabled;
        self
    }

    /// Replace all options at once.
    #[must_use]
    pub const fn options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    /// Compile the pattern.
    ///
    /// # Errors
    ///
    /// Returns a [`CompileError`] if the pattern is invalid.
    pub fn build(self) -> Result<Pattern, CompileError> {
        Pattern::with_options(&self.source, self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_groups_including_whole_match() {
        let pattern = Pattern::new(r"^(g\.)?([0-9]*)$").unwrap();
        assert_eq!(pattern.group_count(), 3);

        let pattern = Pattern::new("abc").unwrap();
        assert_eq!(pattern.group_count(), 1);
    }

    #[test]
    fn escaped_parens_do_not_capture() {
        let pattern = Pattern::new(r"\((a)\)").unwrap();
        assert_eq!(pattern.group_count(), 2);
        assert!(pattern.is_match("(a)"));
        assert!(!pattern.is_match("a"));
    }

    #[test]
    fn dot_spans_lines_by_default() {
        let pattern = Pattern::new("^a.b$").unwrap();
        assert!(pattern.is_match("a\nb"));
    }

    #[test]
    fn newline_mode_splits_lines() {
        let pattern = Pattern::builder("^b$").newline(true).build().unwrap();
        assert!(pattern.is_match("a\nb\nc"));

        let pattern = Pattern::builder("^a.b$").newline(true).build().unwrap();
        assert!(!pattern.is_match("a\nb"));

        let pattern = Pattern::builder("a[^x]b").newline(true).build().unwrap();
        assert!(!pattern.is_match("a\nb"));
        assert!(pattern.is_match("ayb"));
    }

    #[test]
    fn case_insensitive() {
        let pattern = Pattern::builder("^del[acgt]+$")
            .case_insensitive(true)
            .build()
            .unwrap();
        assert!(pattern.is_match("DELACGT"));
    }

    #[test]
    fn rust_dialect_passes_through() {
        let pattern = Pattern::builder(r"^(?P<num>\d+)$")
            .dialect(Dialect::Rust)
            .build()
            .unwrap();
        assert_eq!(pattern.group_count(), 2);
        assert!(pattern.is_match("123"));

        // the same text is not ERE
        assert!(matches!(
            Pattern::new(r"^(?P<num>\d+)$"),
            Err(CompileError::Syntax { .. })
        ));
    }

    #[test]
    fn engine_errors_are_reported() {
        let err = Pattern::new("a{3,1}").unwrap_err();
        assert!(matches!(err, CompileError::Regex { .. }));
        assert_eq!(err.pattern(), Some("a{3,1}"));
    }

    #[test]
    fn dialect_parsing() {
        assert_eq!("ere".parse::<Dialect>(), Ok(Dialect::Extended));
        assert_eq!("POSIX".parse::<Dialect>(), Ok(Dialect::Extended));
        assert_eq!("rust".parse::<Dialect>(), Ok(Dialect::Rust));
        assert!("pcre".parse::<Dialect>().is_err());
        assert_eq!(Dialect::Extended.to_string(), "ere");
    }

    #[test]
    fn debug_shows_source() {
        let pattern = Pattern::new("a(b)").unwrap();
        let debug = format!("{pattern:?}");
        assert!(debug.contains("a(b)"));
        assert_eq!(pattern.to_string(), "a(b)");
    }
}

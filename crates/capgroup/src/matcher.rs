//! The capture-group matcher.
//!
//! A [`CaptureMatcher`] owns a compiled [`Pattern`] and a span buffer that is
//! reused by every match. Dropping the matcher releases both.

use std::fmt;

use regex::CaptureLocations;

use crate::error::CompileError;
use crate::groups::{Groups, Span};
use crate::pattern::Pattern;

/// Compiles a pattern once and extracts numbered capture groups from inputs.
///
/// ```
/// use capgroup::CaptureMatcher;
///
/// let mut matcher = CaptureMatcher::new(r"^(g\.)?([0-9]*)$").unwrap();
/// let groups = matcher.matches("g.123456").unwrap();
/// assert_eq!(groups.extract(1).as_deref(), Some("g."));
/// assert_eq!(groups.extract(2).as_deref(), Some("123456"));
/// ```
pub struct CaptureMatcher {
    pattern: Pattern,
    locations: CaptureLocations,
    max_groups: usize,
}

impl CaptureMatcher {
    /// Compile an ERE pattern, sized to exactly the groups it defines.
    ///
    /// # Errors
    ///
    /// Returns a [`CompileError`] if the pattern is invalid.
    pub fn new(pattern: &str) -> Result<Self, CompileError> {
        Ok(Self::from_pattern(Pattern::new(pattern)?))
    }

    /// Compile an ERE pattern reporting at most `max_groups` groups,
    /// counting group 0.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::ZeroCapacity`] if `max_groups` is 0, or
    /// another [`CompileError`] if the pattern is invalid.
    pub fn with_max_groups(pattern: &str, max_groups: usize) -> Result<Self, CompileError> {
        if max_groups == 0 {
            return Err(CompileError::ZeroCapacity);
        }
        Self::with_capacity(Pattern::new(pattern)?, max_groups)
    }

    /// Wrap an already compiled pattern, sized to its group count.
    #[must_use]
    pub fn from_pattern(pattern: Pattern) -> Self {
        let max_groups = pattern.group_count();
        Self {
            locations: pattern.capture_locations(),
            pattern,
            max_groups,
        }
    }

    /// Wrap an already compiled pattern with a fixed capacity.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::ZeroCapacity`] if `max_groups` is 0.
    pub fn with_capacity(pattern: Pattern, max_groups: usize) -> Result<Self, CompileError> {
        if max_groups == 0 {
            return Err(CompileError::ZeroCapacity);
        }
        Ok(Self {
            locations: pattern.capture_locations(),
            pattern,
            max_groups,
        })
    }

    /// The compiled pattern.
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// How many group slots every match reports.
    #[must_use]
    pub const fn max_groups(&self) -> usize {
        self.max_groups
    }

    /// How many groups the pattern itself defines, counting group 0.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.pattern.group_count()
    }

    /// Match `input`, overwriting the span buffer.
    ///
    /// Returns `None` when the pattern does not match; that is an ordinary
    /// outcome, not an error. The returned [`Groups`] borrows both the
    /// matcher and `input`, so it must be dropped before the next match.
    ///
    /// # Match selection
    ///
    /// The leftmost match wins, as with `regexec`. Among matches starting at
    /// the same position, alternatives are tried in order and quantifiers
    /// are greedy; POSIX instead asks for the longest, subexpression by
    /// subexpression. A pattern anchored at both ends always gets the same
    /// overall match. Group boundaries also agree unless an alternation can
    /// end at more than one place, so patterns like `^(g\.)?([0-9]+)$` are
    /// unaffected. They differ for ambiguous alternations:
    ///
    /// ```
    /// use capgroup::{CaptureMatcher, Span};
    ///
    /// // regexec reports [0-2]
    /// let mut matcher = CaptureMatcher::new("a|ab").unwrap();
    /// assert_eq!(matcher.matches("ab").unwrap().whole(), Span::new(0, 1));
    ///
    /// // regexec reports [0-2] and group 1 as [1-2]
    /// let mut matcher = CaptureMatcher::new("x(a*|b)").unwrap();
    /// let groups = matcher.matches("xb").unwrap();
    /// assert_eq!(groups.span(1), Some(Span::new(1, 1)));
    /// ```
    pub fn matches<'h>(&mut self, input: &'h str) -> Option<Groups<'_, 'h>> {
        let whole = self
            .pattern
            .regex()
            .captures_read(&mut self.locations, input)?;
        Some(Groups::new(
            input,
            &self.locations,
            Span::new(whole.start(), whole.end()),
            self.max_groups,
        ))
    }

    /// Test for a match without touching the span buffer.
    #[must_use]
    pub fn is_match(&self, input: &str) -> bool {
        self.pattern.is_match(input)
    }

    /// Give the compiled pattern back, releasing the span buffer.
    #[must_use]
    pub fn into_pattern(self) -> Pattern {
        self.pattern
    }
}

impl fmt::Debug for CaptureMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureMatcher")
            .field("pattern", &self.pattern.as_str())
            .field("max_groups", &self.max_groups)
            .finish_non_exhaustive()
    }
}

impl TryFrom<&str> for CaptureMatcher {
    type Error = CompileError;

    fn try_from(pattern: &str) -> Result<Self, Self::Error> {
        Self::new(pattern)
    }
}

/// Compile `pattern`, test `input`, and drop the pattern again.
///
/// A pattern that does not compile counts as not matching.
#[must_use]
pub fn is_match(pattern: &str, input: &str) -> bool {
    Pattern::new(pattern).is_ok_and(|compiled| compiled.is_match(input))
}

//! Capture group results.
//!
//! [`Groups`] is the borrowed view returned by a successful match: it reads
//! the matcher's span buffer and the matched input in place, and the borrow
//! checker keeps it from outliving either. [`OwnedGroups`] is the detached
//! copy for callers that want to keep results around.

use std::fmt;
use std::ops::Range;

use regex::CaptureLocations;
use serde::{Deserialize, Deserializer, Serialize};

/// A half-open byte range `[start, end)` into a matched input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// First byte of the group.
    pub start: usize,
    /// One past the last byte of the group.
    pub end: usize,
}

impl Span {
    /// Create a span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length in bytes; 0 for an inverted span.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if the group matched zero characters.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check that the span selects whole characters of `text`.
    #[must_use]
    pub fn fits(&self, text: &str) -> bool {
        self.start <= self.end
            && self.end <= text.len()
            && text.is_char_boundary(self.start)
            && text.is_char_boundary(self.end)
    }

    /// The span as a range.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Get the spanned text from the original input.
    #[must_use]
    pub fn as_str<'a>(&self, text: &'a str) -> &'a str {
        &text[self.range()]
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.range()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:2}-{:2}]", self.start, self.end)
    }
}

/// The groups of one successful match.
///
/// Slot 0 is the whole match and is always set. Slots past the pattern's own
/// group count, up to the matcher's capacity, are always unset.
#[derive(Clone, Copy)]
pub struct Groups<'m, 'h> {
    input: &'h str,
    locations: &'m CaptureLocations,
    whole: Span,
    len: usize,
}

impl<'m, 'h> Groups<'m, 'h> {
    pub(crate) const fn new(
        input: &'h str,
        locations: &'m CaptureLocations,
        whole: Span,
        len: usize,
    ) -> Self {
        Self {
            input,
            locations,
            whole,
            len,
        }
    }

    /// Number of group slots, i.e. the matcher's capacity.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Check if there are no group slots. Never true for a real match.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The matched input.
    #[must_use]
    pub const fn input(&self) -> &'h str {
        self.input
    }

    /// Span of the whole match (group 0).
    #[must_use]
    pub const fn whole(&self) -> Span {
        self.whole
    }

    /// Span of group `index`, or `None` if it did not participate.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`len`](Self::len).
    #[must_use]
    pub fn span(&self, index: usize) -> Option<Span> {
        self.check_index(index);
        self.slot(index)
    }

    /// Text of group `index` without copying, empty groups included.
    ///
    /// Returns `None` for unset groups and for indices out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'h str> {
        if index >= self.len {
            return None;
        }
        self.slot(index).map(|span| span.as_str(self.input))
    }

    /// Copy group `index` out as an owned string.
    ///
    /// Returns `None` when the group did not participate or matched nothing.
    /// Every call returns a fresh `String`; the matcher keeps no reference
    /// to it.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`len`](Self::len).
    #[must_use]
    pub fn extract(&self, index: usize) -> Option<String> {
        let span = self.span(index)?;
        if span.is_empty() {
            None
        } else {
            Some(span.as_str(self.input).to_owned())
        }
    }

    /// [`extract`](Self::extract) every slot in order.
    #[must_use]
    pub fn extract_all(&self) -> Vec<Option<String>> {
        (0..self.len).map(|index| self.extract(index)).collect()
    }

    /// Iterate over `(index, span)` for every slot.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<Span>)> + use<'m, 'h> {
        let groups = *self;
        (0..self.len).map(move |index| (index, groups.slot(index)))
    }

    /// Copy the input and spans into a value with no borrows.
    #[must_use]
    pub fn to_owned_groups(&self) -> OwnedGroups {
        OwnedGroups {
            input: self.input.to_owned(),
            spans: self.iter().map(|(_, span)| span).collect(),
        }
    }

    fn slot(&self, index: usize) -> Option<Span> {
        if index == 0 {
            return Some(self.whole);
        }
        self.locations
            .get(index)
            .map(|(start, end)| Span::new(start, end))
    }

    fn check_index(&self, index: usize) {
        assert!(
            index < self.len,
            "group index {index} out of range for a matcher with capacity {}",
            self.len
        );
    }
}

impl fmt::Debug for Groups<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Groups")
            .field("input", &self.input)
            .field("spans", &self.iter().map(|(_, span)| span).collect::<Vec<_>>())
            .finish()
    }
}

/// A match result that owns its input text.
///
/// Every set span fits its input; deserializing anything else fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnedGroups {
    input: String,
    spans: Vec<Option<Span>>,
}

impl<'de> Deserialize<'de> for OwnedGroups {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            input: String,
            spans: Vec<Option<Span>>,
        }

        let Raw { input, spans } = Raw::deserialize(deserializer)?;
        for (index, span) in spans.iter().enumerate() {
            if let Some(span) = span.filter(|span| !span.fits(&input)) {
                return Err(serde::de::Error::custom(format!(
                    "group {index} span {span} does not fit an input of {} bytes",
                    input.len()
                )));
            }
        }
        Ok(Self { input, spans })
    }
}

impl OwnedGroups {
    /// Number of group slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Check if there are no group slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The matched input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Span of group `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn span(&self, index: usize) -> Option<Span> {
        self.spans[index]
    }

    /// Text of group `index`, empty groups included.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.spans
            .get(index)
            .copied()
            .flatten()
            .map(|span| span.as_str(&self.input))
    }

    /// Owned copy of group `index`; `None` if unset or empty.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn extract(&self, index: usize) -> Option<String> {
        self.span(index)
            .filter(|span| !span.is_empty())
            .map(|span| span.as_str(&self.input).to_owned())
    }

    /// Iterate over `(index, span)` for every slot.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<Span>)> + '_ {
        self.spans.iter().copied().enumerate()
    }
}

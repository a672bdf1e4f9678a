//! Error types for ERE validation.

use thiserror::Error;

/// An ERE pattern that could not be lowered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at offset {offset}")]
pub struct SyntaxError {
    kind: SyntaxErrorKind,
    offset: usize,
}

impl SyntaxError {
    /// Create an error of the given kind at a byte offset into the pattern.
    #[must_use]
    pub const fn new(kind: SyntaxErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// What went wrong.
    #[must_use]
    pub const fn kind(&self) -> &SyntaxErrorKind {
        &self.kind
    }

    /// Byte offset of the offending construct.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }
}

/// The kinds of ERE syntax errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    /// The pattern ends in a lone backslash.
    #[error("trailing backslash")]
    TrailingEscape,

    /// A `(` without its closing `)`.
    #[error("unbalanced parenthesis")]
    UnbalancedParenthesis,

    /// A `[` without its closing `]`.
    #[error("unterminated bracket expression")]
    UnterminatedBracket,

    /// A `[:name:]` class that POSIX does not define.
    #[error("unknown character class '{0}'")]
    UnknownClass(String),

    /// A bracket range whose end sorts before its start.
    #[error("invalid range '{start}-{end}'")]
    InvalidRange {
        /// First endpoint.
        start: char,
        /// Last endpoint.
        end: char,
    },

    /// A `[=x=]` or `[.x.]` naming more than one character.
    #[error("multi-character collating element '{0}'")]
    CollatingElement(String),

    /// Two duplication symbols in a row, e.g. `a*?`.
    #[error("repeated duplication symbol")]
    RepeatedQuantifier,

    /// A construct ERE does not have, e.g. `(?i)`.
    #[error("unsupported construct '{0}'")]
    Unsupported(&'static str),
}

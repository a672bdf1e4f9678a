//! Lowering of POSIX ERE into `regex` crate syntax.

use crate::error::{SyntaxError, SyntaxErrorKind};

/// The character classes POSIX defines for bracket expressions.
pub const POSIX_CLASSES: [&str; 12] = [
    "alnum", "alpha", "blank", "cntrl", "digit", "graph", "lower", "print", "punct", "space",
    "upper", "xdigit",
];

/// Characters the `regex` crate treats as meta outside a class.
const META: &[char] = &[
    '\\', '.', '+', '*', '?', '(', ')', '|', '[', ']', '{', '}', '^', '$', '#', '&', '-', '~',
];

/// Characters with an operator meaning inside a `regex` crate class.
const CLASS_META: &[char] = &['\\', '[', ']', '^', '-', '&', '~'];

/// Lowering options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// `REG_NEWLINE`: a non-matching bracket expression never matches `\n`.
    pub newline: bool,
}

/// Lower an ERE pattern with default options.
///
/// # Errors
///
/// Returns a [`SyntaxError`] when the pattern is not valid ERE.
pub fn translate(pattern: &str) -> Result<String, SyntaxError> {
    translate_with(pattern, Options::default())
}

/// Lower an ERE pattern.
///
/// # Errors
///
/// Returns a [`SyntaxError`] when the pattern is not valid ERE.
pub fn translate_with(pattern: &str, options: Options) -> Result<String, SyntaxError> {
    Translator::new(pattern, options).run()
}

/// Check that a pattern is valid ERE without keeping the lowered form.
///
/// # Errors
///
/// Returns the first [`SyntaxError`] found.
pub fn validate(pattern: &str) -> Result<(), SyntaxError> {
    translate(pattern).map(|_| ())
}

struct Translator<'a> {
    src: &'a str,
    chars: Vec<(usize, char)>,
    pos: usize,
    out: String,
    open_groups: Vec<usize>,
    after_quantifier: bool,
    options: Options,
}

impl<'a> Translator<'a> {
    fn new(src: &'a str, options: Options) -> Self {
        Self {
            src,
            chars: src.char_indices().collect(),
            pos: 0,
            out: String::with_capacity(src.len() + 8),
            open_groups: Vec::new(),
            after_quantifier: false,
            options,
        }
    }

    fn run(mut self) -> Result<String, SyntaxError> {
        while let Some((at, c)) = self.bump() {
            let quantifier = match c {
                '\\' => {
                    self.escape(at)?;
                    false
                }
                '[' => {
                    self.bracket(at)?;
                    false
                }
                '(' => {
                    self.open_group(at)?;
                    false
                }
                ')' => {
                    if self.open_groups.pop().is_some() {
                        self.out.push(')');
                    } else {
                        self.out.push_str(r"\)");
                    }
                    false
                }
                '*' | '+' | '?' => {
                    self.check_repeat(at)?;
                    self.out.push(c);
                    true
                }
                '{' => self.interval(at)?,
                '}' => {
                    self.out.push_str(r"\}");
                    false
                }
                // anchors, any-character and alternation mean the same to the engine
                '^' | '$' | '.' | '|' => {
                    self.out.push(c);
                    false
                }
                _ => {
                    push_literal(&mut self.out, c);
                    false
                }
            };
            self.after_quantifier = quantifier;
        }

        if let Some(&at) = self.open_groups.last() {
            return Err(SyntaxError::new(SyntaxErrorKind::UnbalancedParenthesis, at));
        }
        Ok(self.out)
    }

    fn bump(&mut self) -> Option<(usize, char)> {
        let next = self.chars.get(self.pos).copied();
        if next.is_some() {
            self.pos += 1;
        }
        next
    }

    fn peek(&self) -> Option<char> {
        self.peek_nth(0)
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.chars.get(self.pos + n).map(|&(_, c)| c)
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    const fn check_repeat(&self, at: usize) -> Result<(), SyntaxError> {
        if self.after_quantifier {
            Err(SyntaxError::new(SyntaxErrorKind::RepeatedQuantifier, at))
        } else {
            Ok(())
        }
    }

    fn escape(&mut self, at: usize) -> Result<(), SyntaxError> {
        let Some((_, c)) = self.bump() else {
            return Err(SyntaxError::new(SyntaxErrorKind::TrailingEscape, at));
        };
        match c {
            // GNU word escapes
            'w' | 'W' | 's' | 'S' | 'b' | 'B' => {
                self.out.push('\\');
                self.out.push(c);
            }
            '<' => self.out.push_str(r"\b{start}"),
            '>' => self.out.push_str(r"\b{end}"),
            _ => push_literal(&mut self.out, c),
        }
        Ok(())
    }

    fn open_group(&mut self, at: usize) -> Result<(), SyntaxError> {
        if self.peek() == Some('?') {
            return Err(SyntaxError::new(SyntaxErrorKind::Unsupported("(?"), at));
        }
        self.open_groups.push(at);
        self.out.push('(');
        Ok(())
    }

    /// Copy `{m}`, `{m,}` or `{m,n}` through; anything else makes `{` literal.
    fn interval(&mut self, at: usize) -> Result<bool, SyntaxError> {
        let mut n = 0;
        let mut seen_digit = false;
        let mut seen_comma = false;
        loop {
            match self.peek_nth(n) {
                Some(d) if d.is_ascii_digit() => {
                    if !seen_comma {
                        seen_digit = true;
                    }
                    n += 1;
                }
                Some(',') if !seen_comma => {
                    seen_comma = true;
                    n += 1;
                }
                Some('}') if seen_digit => break,
                _ => {
                    self.out.push_str(r"\{");
                    return Ok(false);
                }
            }
        }

        self.check_repeat(at)?;
        let start = self.chars[self.pos - 1].0;
        let end = self
            .chars
            .get(self.pos + n + 1)
            .map_or(self.src.len(), |&(offset, _)| offset);
        self.out.push_str(&self.src[start..end]);
        self.pos += n + 1;
        Ok(true)
    }

    fn bracket(&mut self, at: usize) -> Result<(), SyntaxError> {
        let mut class = String::from("[");
        let negated = self.eat('^');
        if negated {
            class.push('^');
            if self.options.newline {
                class.push_str(r"\n");
            }
        }

        let mut first = true;
        loop {
            let Some((offset, c)) = self.bump() else {
                return Err(SyntaxError::new(SyntaxErrorKind::UnterminatedBracket, at));
            };
            if c == ']' && !first {
                break;
            }
            first = false;

            let start = if c == '[' {
                match self.peek() {
                    Some(':') => {
                        self.pos += 1;
                        let name = self.delimited(':', at)?;
                        if !POSIX_CLASSES.contains(&name.as_str()) {
                            return Err(SyntaxError::new(
                                SyntaxErrorKind::UnknownClass(name),
                                offset,
                            ));
                        }
                        class.push_str("[:");
                        class.push_str(&name);
                        class.push_str(":]");
                        continue;
                    }
                    Some(d @ ('=' | '.')) => {
                        self.pos += 1;
                        self.collating(d, offset, at)?
                    }
                    _ => '[',
                }
            } else {
                c
            };

            let is_range = self.peek() == Some('-') && self.peek_nth(1).is_some_and(|n| n != ']');
            if !is_range {
                push_class_literal(&mut class, start);
                continue;
            }

            self.pos += 1;
            let Some((end_offset, end)) = self.bump() else {
                return Err(SyntaxError::new(SyntaxErrorKind::UnterminatedBracket, at));
            };
            let end = if end == '[' && matches!(self.peek(), Some('=' | '.')) {
                let d = self.peek().unwrap_or('.');
                self.pos += 1;
                self.collating(d, end_offset, at)?
            } else {
                end
            };
            if end < start {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::InvalidRange { start, end },
                    offset,
                ));
            }
            push_class_literal(&mut class, start);
            class.push('-');
            push_class_literal(&mut class, end);
        }

        class.push(']');
        self.out.push_str(&class);
        Ok(())
    }

    /// Read up to the closing `<d>]` of a `[:`, `[=` or `[.` item.
    fn delimited(&mut self, d: char, bracket_at: usize) -> Result<String, SyntaxError> {
        let mut name = String::new();
        loop {
            match self.bump() {
                Some((_, c)) if c == d && self.peek() == Some(']') => {
                    self.pos += 1;
                    return Ok(name);
                }
                Some((_, c)) => name.push(c),
                None => {
                    return Err(SyntaxError::new(
                        SyntaxErrorKind::UnterminatedBracket,
                        bracket_at,
                    ));
                }
            }
        }
    }

    fn collating(&mut self, d: char, offset: usize, bracket_at: usize) -> Result<char, SyntaxError> {
        let element = self.delimited(d, bracket_at)?;
        let mut chars = element.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(SyntaxError::new(
                SyntaxErrorKind::CollatingElement(element),
                offset,
            )),
        }
    }
}

fn push_literal(out: &mut String, c: char) {
    if META.contains(&c) {
        out.push('\\');
    }
    out.push(c);
}

fn push_class_literal(out: &mut String, c: char) {
    if CLASS_META.contains(&c) {
        out.push('\\');
    }
    out.push(c);
}

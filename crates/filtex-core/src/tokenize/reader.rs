// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Token recognition strategies.
//!
//! A [`TokenReader`] is an immutable rule that may recognize one token at
//! a scan position. Readers follow a functional cursor contract: a reader
//! that matches returns the token together with the advanced byte offset,
//! and a reader that does not match returns `None` without any side
//! effect. The [`Tokenizer`](super::Tokenizer) tries readers in
//! descending [`priority`](TokenReader::priority) order.

use ecow::EcoString;

use super::Token;

/// A priority-ordered token recognition rule.
///
/// Higher priorities are tried first; ties are broken by registration
/// order. Pattern readers default their priority to the pattern length so
/// that longer spellings win over their own prefixes (`>=` before `>`).
#[derive(Debug, Clone)]
pub enum TokenReader {
    /// Recognizes a fixed spelling and yields a fixed token.
    Pattern {
        /// The token emitted on a match.
        token: Token,
        /// The spelling to look for.
        pattern: EcoString,
        /// Whether matching ignores ASCII case.
        ignore_case: bool,
        /// Priority of this reader.
        priority: i32,
    },
    /// Recognizes a quoted run of text and yields its contents.
    QuotedText {
        /// The quote character delimiting the literal.
        quote: char,
        /// Priority of this reader.
        priority: i32,
    },
    /// Recognizes an unsigned decimal number with a fixed `.` separator.
    Number {
        /// Priority of this reader.
        priority: i32,
    },
    /// Last-resort reader: consumes up to the next whitespace as text.
    BareText {
        /// Priority of this reader.
        priority: i32,
    },
}

impl TokenReader {
    /// Creates an ASCII-case-insensitive pattern reader.
    ///
    /// The priority is the pattern length, so longer spellings are tried
    /// before shorter ones.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is empty; an empty pattern would never advance
    /// the scan position.
    #[must_use]
    pub fn pattern(token: Token, pattern: impl Into<EcoString>) -> Self {
        Self::pattern_with_case(token, pattern, true)
    }

    /// Creates a pattern reader with explicit case sensitivity.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is empty.
    #[must_use]
    pub fn pattern_with_case(
        token: Token,
        pattern: impl Into<EcoString>,
        ignore_case: bool,
    ) -> Self {
        let pattern = pattern.into();
        assert!(!pattern.is_empty(), "pattern must not be empty");
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_possible_wrap,
            reason = "patterns are short operator spellings"
        )]
        let priority = pattern.len() as i32;
        Self::Pattern {
            token,
            pattern,
            ignore_case,
            priority,
        }
    }

    /// Creates a quoted-text reader for the given quote character.
    #[must_use]
    pub const fn quoted_text(priority: i32, quote: char) -> Self {
        Self::QuotedText { quote, priority }
    }

    /// Creates a number reader.
    #[must_use]
    pub const fn number(priority: i32) -> Self {
        Self::Number { priority }
    }

    /// Creates a bare-text reader.
    #[must_use]
    pub const fn bare_text(priority: i32) -> Self {
        Self::BareText { priority }
    }

    /// Priority of this reader; higher is tried first.
    #[must_use]
    pub const fn priority(&self) -> i32 {
        match self {
            Self::Pattern { priority, .. }
            | Self::QuotedText { priority, .. }
            | Self::Number { priority }
            | Self::BareText { priority } => *priority,
        }
    }

    /// Tries to recognize a token at byte offset `at` in `source`.
    ///
    /// Returns the token and the offset just past it on a match. `at`
    /// must lie on a character boundary; the tokenizer only ever calls
    /// with offsets produced by its own scanning.
    #[must_use]
    pub fn read(&self, source: &str, at: usize) -> Option<(Token, usize)> {
        match self {
            Self::Pattern {
                token,
                pattern,
                ignore_case,
                ..
            } => read_pattern(source, at, token, pattern, *ignore_case),
            Self::QuotedText { quote, .. } => read_quoted(source, at, *quote),
            Self::Number { .. } => read_number(source, at),
            Self::BareText { .. } => read_bare(source, at),
        }
    }
}

fn read_pattern(
    source: &str,
    at: usize,
    token: &Token,
    pattern: &str,
    ignore_case: bool,
) -> Option<(Token, usize)> {
    let end = at.checked_add(pattern.len())?;
    let candidate = source.get(at..end)?;
    let matched = if ignore_case {
        candidate.eq_ignore_ascii_case(pattern)
    } else {
        candidate == pattern
    };
    matched.then(|| (token.clone(), end))
}

fn read_quoted(source: &str, at: usize, quote: char) -> Option<(Token, usize)> {
    let rest = &source[at..];
    let mut chars = rest.char_indices();
    let (_, first) = chars.next()?;
    if first != quote {
        return None;
    }
    for (index, c) in chars {
        if c == quote {
            let content = &rest[quote.len_utf8()..index];
            return Some((Token::Text(content.into()), at + index + c.len_utf8()));
        }
    }
    // Unterminated quote: the rest of the input is the literal.
    let content = &rest[quote.len_utf8()..];
    Some((Token::Text(content.into()), source.len()))
}

fn read_number(source: &str, at: usize) -> Option<(Token, usize)> {
    let rest = &source[at..];
    let bytes = rest.as_bytes();

    let mut end = 0;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    if end == 0 {
        return None;
    }

    // A `.` is part of the number only when a digit follows; a trailing
    // dot is left for other readers (e.g. a concatenation pattern).
    if bytes.get(end) == Some(&b'.') && bytes.get(end + 1).is_some_and(u8::is_ascii_digit) {
        end += 2;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
    }

    let value: f64 = rest[..end].parse().unwrap_or(0.0);
    Some((Token::Number(value), at + end))
}

fn read_bare(source: &str, at: usize) -> Option<(Token, usize)> {
    let rest = &source[at..];
    let mut chars = rest.char_indices();
    let (_, first) = chars.next()?;

    // The first character is consumed unconditionally; the run then
    // extends to the next whitespace.
    let mut end = first.len_utf8();
    for (index, c) in chars {
        if c.is_whitespace() {
            break;
        }
        end = index + c.len_utf8();
    }
    Some((Token::Text(rest[..end].into()), at + end))
}

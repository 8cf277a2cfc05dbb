// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The value-recognition chain.
//!
//! A [`ValueReader`] tries to turn the head of the remaining token
//! sequence into one self-contained [`Template`]: a literal, a negated
//! sub-expression, or a bracketed sub-expression. The parser tries its
//! registered readers in order; the first that matches wins.
//!
//! A reader distinguishes three outcomes: *no match* (the cursor is left
//! untouched and the next reader is tried), *a value*, and *matched but
//! failed* (tokens were consumed and a warning already recorded; parsing
//! aborts upward).

use crate::diagnostics::ParseWarnings;
use crate::template::{Template, combinators};
use crate::tokenize::{Symbol, Token};

use super::{TemplateParser, TokenCursor};

/// Outcome of one reader's attempt at the head of the token sequence.
#[derive(Debug)]
pub(crate) enum ReadValue {
    /// The head is not this reader's shape; the cursor is untouched.
    NoMatch,
    /// A complete value was read.
    Value(Template),
    /// The reader matched but the content was malformed; a warning has
    /// been recorded and the cursor may have advanced.
    Failed,
}

/// A strategy for reading one leaf or bracketed sub-expression.
///
/// Registration order is significant: the parser tries readers
/// first-match-wins in the order they were registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueReader {
    /// Reads a boolean literal token.
    BoolLiteral,
    /// Reads a numeric literal token.
    NumberLiteral,
    /// Reads a text literal token.
    TextLiteral,
    /// Reads a negation marker, then the complete remainder, and wraps
    /// it in a boolean negation.
    Negation(Symbol),
    /// Reads a negation marker, then the complete remainder, and wraps
    /// it in a numeric negation.
    NegatedNumber(Symbol),
    /// Reads a bracketed sub-expression through its matching close.
    Parenthesised {
        /// The opening bracket symbol.
        open: Symbol,
        /// The closing bracket symbol.
        close: Symbol,
    },
}

impl ValueReader {
    pub(crate) fn read(
        self,
        parser: &TemplateParser,
        cursor: &mut TokenCursor<'_>,
        warnings: &mut ParseWarnings,
    ) -> ReadValue {
        match self {
            Self::BoolLiteral => match cursor.peek() {
                Some(Token::Bool(value)) => {
                    let value = *value;
                    cursor.advance(1);
                    ReadValue::Value(Template::boolean(value))
                }
                _ => ReadValue::NoMatch,
            },
            Self::NumberLiteral => match cursor.peek() {
                Some(Token::Number(value)) => {
                    let value = *value;
                    cursor.advance(1);
                    ReadValue::Value(Template::number(value))
                }
                _ => ReadValue::NoMatch,
            },
            Self::TextLiteral => match cursor.peek() {
                Some(Token::Text(value)) => {
                    let value = value.clone();
                    cursor.advance(1);
                    ReadValue::Value(Template::text(value))
                }
                _ => ReadValue::NoMatch,
            },
            Self::Negation(marker) => {
                read_negated(parser, cursor, warnings, marker, combinators::negate)
            }
            Self::NegatedNumber(marker) => {
                read_negated(parser, cursor, warnings, marker, combinators::negate_number)
            }
            Self::Parenthesised { open, close } => {
                read_parenthesised(parser, cursor, warnings, open, close)
            }
        }
    }
}

/// Shared shape of the two negation readers: consume the marker, resolve
/// the complete remainder, wrap it.
fn read_negated(
    parser: &TemplateParser,
    cursor: &mut TokenCursor<'_>,
    warnings: &mut ParseWarnings,
    marker: Symbol,
    wrap: fn(Template) -> Template,
) -> ReadValue {
    if !cursor.peek().is_some_and(|token| token.is_symbol(marker)) {
        return ReadValue::NoMatch;
    }
    cursor.advance(1);
    match parser.parse(cursor, warnings) {
        Some(inner) => ReadValue::Value(wrap(inner)),
        None => ReadValue::Failed,
    }
}

fn read_parenthesised(
    parser: &TemplateParser,
    cursor: &mut TokenCursor<'_>,
    warnings: &mut ParseWarnings,
    open: Symbol,
    close: Symbol,
) -> ReadValue {
    if !cursor.peek().is_some_and(|token| token.is_symbol(open)) {
        return ReadValue::NoMatch;
    }

    // Find the matching close, counting nested pairs. Running off the
    // end means the bracket is unmatched: not this reader's match, so
    // the malformed input is signalled upward by whoever reads the head.
    let mut depth = 1usize;
    let mut index = 0usize;
    while depth != 0 {
        index += 1;
        let Some(token) = cursor.peek_at(index) else {
            return ReadValue::NoMatch;
        };
        if token.is_symbol(open) {
            depth += 1;
        } else if token.is_symbol(close) {
            depth -= 1;
        }
    }

    if index == 1 {
        warnings.warn("empty parentheses");
        cursor.advance(index + 1);
        return ReadValue::Failed;
    }

    let mut inner = cursor.slice(1, index);
    let result = parser.parse(&mut inner, warnings);
    cursor.advance(index + 1);
    match result {
        Some(template) => ReadValue::Value(template),
        None => ReadValue::Failed,
    }
}

// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Warning collection for expression compilation.
//!
//! The compiler never fails hard on malformed user input. Instead, every
//! lexical or structural problem is appended to a caller-supplied
//! [`ParseWarnings`] collector and the offending compilation yields no
//! tree. The collector is append-only from the compiler's point of view;
//! hosts read it back after [`compile`](crate::Engine::compile) returns.
//!
//! Warnings integrate with [`miette`] so hosts can render them against the
//! original expression text.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use ecow::EcoString;
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// A single warning produced while compiling an expression.
///
/// Carries a human-readable message and, when the problem is tied to a
/// specific spot in the source text, the byte offset of that spot.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic()]
pub struct Warning {
    /// The warning message.
    pub message: EcoString,
    /// Offset into the expression text, when the warning is tied to one.
    #[label("here")]
    pub position: Option<SourceSpan>,
}

impl Warning {
    /// Returns the byte offset this warning points at, if any.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        self.position.map(|span| span.offset())
    }
}

/// Append-only collector for the warnings of one compilation.
///
/// A collector is created for a single expression and handed to
/// [`compile`](crate::Engine::compile); it owns the expression text so
/// hosts can render collected warnings without keeping the source around
/// separately.
#[derive(Debug, Clone)]
pub struct ParseWarnings {
    expression: EcoString,
    warnings: Vec<Warning>,
}

impl ParseWarnings {
    /// Creates a collector for the given expression text.
    ///
    /// # Panics
    ///
    /// Panics if `expression` is empty; an empty expression is API misuse,
    /// not a user-input error.
    #[must_use]
    pub fn new(expression: impl Into<EcoString>) -> Self {
        let expression = expression.into();
        assert!(
            !expression.is_empty(),
            "expression text must not be empty"
        );
        Self {
            expression,
            warnings: Vec::new(),
        }
    }

    /// The expression text this collector was created for.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Appends a warning that is not tied to a source position.
    pub fn warn(&mut self, message: impl Into<EcoString>) {
        self.warnings.push(Warning {
            message: message.into(),
            position: None,
        });
    }

    /// Appends a warning pointing at a byte offset in the expression.
    pub fn warn_at(&mut self, position: usize, message: impl Into<EcoString>) {
        self.warnings.push(Warning {
            message: message.into(),
            position: Some(position.into()),
        });
    }

    /// Returns true if any warning has been collected.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// The warnings collected so far, in appearance order.
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_in_order() {
        let mut warnings = ParseWarnings::new("a + b");
        warnings.warn("first");
        warnings.warn_at(4, "second");

        assert!(warnings.has_warnings());
        assert_eq!(warnings.warnings().len(), 2);
        assert_eq!(warnings.warnings()[0].message, "first");
        assert_eq!(warnings.warnings()[0].offset(), None);
        assert_eq!(warnings.warnings()[1].offset(), Some(4));
    }

    #[test]
    fn keeps_expression_text() {
        let warnings = ParseWarnings::new("1 < 2");
        assert_eq!(warnings.expression(), "1 < 2");
        assert!(!warnings.has_warnings());
    }

    #[test]
    fn warning_display_is_the_message() {
        let mut warnings = ParseWarnings::new("x");
        warnings.warn_at(0, "illegal character '~'");
        assert_eq!(
            warnings.warnings()[0].to_string(),
            "illegal character '~'"
        );
    }

    #[test]
    #[should_panic(expected = "expression text must not be empty")]
    fn empty_expression_is_misuse() {
        let _ = ParseWarnings::new("");
    }
}

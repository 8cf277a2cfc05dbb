// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The compiled evaluation tree.
//!
//! A [`Template`] is an immutable tree node produced by compilation. Every
//! node — literal or composite — can be asked for a boolean, numeric, or
//! textual result, independently and repeatedly, in any order. Whichever
//! representation a node natively computes, the other two views come from
//! the [`coerce`] lattice.
//!
//! Nodes hold no mutable state and perform no I/O: re-evaluating is
//! deterministic and cheap, and a compiled tree is `Send + Sync` by
//! construction, so concurrent evaluation needs no locking.
//!
//! # Example
//!
//! ```
//! use filtex_core::template::{Template, combinators};
//!
//! let tree = combinators::sum(vec![Template::number(2.0), Template::text("40")]);
//! assert_eq!(tree.as_number(), 42.0);
//! assert_eq!(tree.as_text(), "42");
//! assert!(tree.as_boolean());
//! ```

pub mod coerce;
pub mod combinators;

use ecow::EcoString;

/// How a [`Template::TextCompare`] node compares its operands' text views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextOp {
    /// Case-sensitive equality.
    Equal,
    /// Case-sensitive inequality.
    NotEqual,
    /// ASCII-case-insensitive equality.
    EqualIgnoreCase,
    /// ASCII-case-insensitive inequality.
    NotEqualIgnoreCase,
    /// Left starts with right.
    StartsWith,
    /// Left ends with right.
    EndsWith,
    /// Left contains right.
    Contains,
}

impl TextOp {
    fn compare(self, lhs: &str, rhs: &str) -> bool {
        match self {
            Self::Equal => lhs == rhs,
            Self::NotEqual => lhs != rhs,
            Self::EqualIgnoreCase => lhs.eq_ignore_ascii_case(rhs),
            Self::NotEqualIgnoreCase => !lhs.eq_ignore_ascii_case(rhs),
            Self::StartsWith => lhs.starts_with(rhs),
            Self::EndsWith => lhs.ends_with(rhs),
            Self::Contains => lhs.contains(rhs),
        }
    }
}

/// How a [`Template::NumberCompare`] node compares its operands' numeric
/// views. Comparisons follow IEEE-754 ordering (any comparison against
/// NaN is false).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberOp {
    /// Strictly greater.
    Greater,
    /// Greater or equal.
    GreaterOrEqual,
    /// Strictly less.
    Less,
    /// Less or equal.
    LessOrEqual,
}

impl NumberOp {
    fn compare(self, lhs: f64, rhs: f64) -> bool {
        match self {
            Self::Greater => lhs > rhs,
            Self::GreaterOrEqual => lhs >= rhs,
            Self::Less => lhs < rhs,
            Self::LessOrEqual => lhs <= rhs,
        }
    }
}

/// An immutable, tri-modal evaluation tree node.
///
/// Children are exclusively owned; the structure is a tree built
/// bottom-up during parsing and never mutated afterwards. Construct
/// literals with [`Template::boolean`], [`Template::number`], and
/// [`Template::text`], and composites with the functions in
/// [`combinators`].
#[derive(Debug, Clone, PartialEq)]
pub enum Template {
    /// A literal, pre-seeded with all three coerced projections.
    Constant {
        /// The boolean view.
        boolean: bool,
        /// The numeric view.
        number: f64,
        /// The textual view.
        text: EcoString,
    },
    /// Boolean negation of the operand's boolean view.
    Not(Box<Template>),
    /// Numeric negation of the operand's numeric view.
    Negate(Box<Template>),
    /// True when every operand is true; short-circuits.
    All(Vec<Template>),
    /// True when any operand is true; short-circuits.
    Any(Vec<Template>),
    /// Comparison over the operands' text views.
    TextCompare {
        /// The comparison applied.
        op: TextOp,
        /// Left operand.
        lhs: Box<Template>,
        /// Right operand.
        rhs: Box<Template>,
    },
    /// Comparison over the operands' numeric views.
    NumberCompare {
        /// The comparison applied.
        op: NumberOp,
        /// Left operand.
        lhs: Box<Template>,
        /// Right operand.
        rhs: Box<Template>,
    },
    /// Concatenation of the operands' text views.
    Concat(Vec<Template>),
    /// Sum of the operands' numeric views.
    Sum(Vec<Template>),
    /// Product of the operands' numeric views.
    Product(Vec<Template>),
    /// Left minus right.
    Sub(Box<Template>, Box<Template>),
    /// Left divided by right; division by zero follows IEEE-754.
    Div(Box<Template>, Box<Template>),
}

impl Template {
    /// A boolean literal, with its numeric and textual projections
    /// pre-seeded through the coercion lattice.
    #[must_use]
    pub fn boolean(value: bool) -> Self {
        Self::Constant {
            boolean: value,
            number: coerce::boolean_to_number(value),
            text: coerce::boolean_to_text(value),
        }
    }

    /// A numeric literal, with its boolean and textual projections
    /// pre-seeded through the coercion lattice.
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Constant {
            boolean: coerce::number_to_boolean(value),
            number: value,
            text: coerce::number_to_text(value),
        }
    }

    /// A text literal, with its boolean and numeric projections
    /// pre-seeded through the coercion lattice.
    #[must_use]
    pub fn text(value: impl Into<EcoString>) -> Self {
        let text = value.into();
        Self::Constant {
            boolean: coerce::text_to_boolean(&text),
            number: coerce::text_to_number(&text),
            text,
        }
    }

    /// Evaluates the boolean view of this node.
    #[must_use]
    pub fn as_boolean(&self) -> bool {
        match self {
            Self::Constant { boolean, .. } => *boolean,
            Self::Not(operand) => !operand.as_boolean(),
            Self::All(operands) => operands.iter().all(Self::as_boolean),
            Self::Any(operands) => operands.iter().any(Self::as_boolean),
            Self::TextCompare { op, lhs, rhs } => op.compare(&lhs.as_text(), &rhs.as_text()),
            Self::NumberCompare { op, lhs, rhs } => op.compare(lhs.as_number(), rhs.as_number()),
            Self::Concat(_) => coerce::text_to_boolean(&self.as_text()),
            // Numeric-native nodes.
            Self::Negate(_) | Self::Sum(_) | Self::Product(_) | Self::Sub(..) | Self::Div(..) => {
                coerce::number_to_boolean(self.as_number())
            }
        }
    }

    /// Evaluates the numeric view of this node.
    #[must_use]
    pub fn as_number(&self) -> f64 {
        match self {
            Self::Constant { number, .. } => *number,
            Self::Negate(operand) => -operand.as_number(),
            Self::Sum(operands) => operands.iter().map(Self::as_number).sum(),
            Self::Product(operands) => operands.iter().map(Self::as_number).product(),
            Self::Sub(lhs, rhs) => lhs.as_number() - rhs.as_number(),
            Self::Div(lhs, rhs) => lhs.as_number() / rhs.as_number(),
            Self::Concat(_) => coerce::text_to_number(&self.as_text()),
            // Boolean-native nodes.
            Self::Not(_)
            | Self::All(_)
            | Self::Any(_)
            | Self::TextCompare { .. }
            | Self::NumberCompare { .. } => coerce::boolean_to_number(self.as_boolean()),
        }
    }

    /// Evaluates the textual view of this node.
    #[must_use]
    pub fn as_text(&self) -> EcoString {
        match self {
            Self::Constant { text, .. } => text.clone(),
            Self::Concat(operands) => {
                let mut out = EcoString::new();
                for operand in operands {
                    out.push_str(&operand.as_text());
                }
                out
            }
            // Boolean-native nodes.
            Self::Not(_)
            | Self::All(_)
            | Self::Any(_)
            | Self::TextCompare { .. }
            | Self::NumberCompare { .. } => coerce::boolean_to_text(self.as_boolean()),
            // Numeric-native nodes.
            Self::Negate(_) | Self::Sum(_) | Self::Product(_) | Self::Sub(..) | Self::Div(..) => {
                coerce::number_to_text(self.as_number())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_views_are_identities() {
        assert!(Template::boolean(true).as_boolean());
        assert!(!Template::boolean(false).as_boolean());
        assert_eq!(Template::number(2.5).as_number(), 2.5);
        assert_eq!(Template::text("abc").as_text(), "abc");
    }

    #[test]
    fn boolean_literal_projections() {
        let t = Template::boolean(true);
        assert_eq!(t.as_number(), 1.0);
        assert_eq!(t.as_text(), "true");

        let f = Template::boolean(false);
        assert_eq!(f.as_number(), 0.0);
        assert_eq!(f.as_text(), "false");
    }

    #[test]
    fn number_literal_projections() {
        assert_eq!(Template::number(5.0).as_text(), "5");
        assert_eq!(Template::number(5.5).as_text(), "5.5");
        assert!(Template::number(5.0).as_boolean());
        assert!(!Template::number(0.0).as_boolean());
    }

    #[test]
    fn text_literal_projections() {
        assert_eq!(Template::text("42").as_number(), 42.0);
        assert_eq!(Template::text("abc").as_number(), 3.0);
        assert!(Template::text("TRUE").as_boolean());
        assert!(!Template::text("42").as_boolean());
    }

    #[test]
    fn round_trip_coercions() {
        let round = Template::number(Template::boolean(true).as_number());
        assert!(round.as_boolean());
        assert_eq!(Template::number(5.0).as_text(), "5");
    }

    #[test]
    fn text_comparisons() {
        let cmp = |op, a: &str, b: &str| Template::TextCompare {
            op,
            lhs: Box::new(Template::text(a)),
            rhs: Box::new(Template::text(b)),
        };
        assert!(cmp(TextOp::Equal, "a", "a").as_boolean());
        assert!(!cmp(TextOp::Equal, "a", "A").as_boolean());
        assert!(cmp(TextOp::EqualIgnoreCase, "a", "A").as_boolean());
        assert!(cmp(TextOp::NotEqual, "a", "b").as_boolean());
        assert!(cmp(TextOp::StartsWith, "hello", "he").as_boolean());
        assert!(cmp(TextOp::EndsWith, "hello", "lo").as_boolean());
        assert!(cmp(TextOp::Contains, "hello", "ell").as_boolean());
    }

    #[test]
    fn number_comparisons_coerce_operands() {
        // "10" parses to 10; "abc" falls back to its length 3.
        let cmp = Template::NumberCompare {
            op: NumberOp::Greater,
            lhs: Box::new(Template::text("10")),
            rhs: Box::new(Template::text("abc")),
        };
        assert!(cmp.as_boolean());
    }

    #[test]
    fn composite_views_cross_coerce() {
        // A comparison is boolean-native; its other views derive from it.
        let cmp = Template::NumberCompare {
            op: NumberOp::Less,
            lhs: Box::new(Template::number(1.0)),
            rhs: Box::new(Template::number(2.0)),
        };
        assert_eq!(cmp.as_number(), 1.0);
        assert_eq!(cmp.as_text(), "true");

        // A sum is numeric-native.
        let sum = Template::Sum(vec![Template::number(2.0), Template::number(3.0)]);
        assert!(sum.as_boolean());
        assert_eq!(sum.as_text(), "5");
    }

    #[test]
    fn concat_joins_text_views() {
        let concat = Template::Concat(vec![
            Template::text("a"),
            Template::number(1.0),
            Template::boolean(true),
        ]);
        assert_eq!(concat.as_text(), "a1true");
        // The numeric view of unparseable concatenated text is its length.
        assert_eq!(concat.as_number(), 6.0);
    }

    #[test]
    fn division_follows_ieee_754() {
        let div = Template::Div(
            Box::new(Template::number(1.0)),
            Box::new(Template::number(0.0)),
        );
        assert_eq!(div.as_number(), f64::INFINITY);
        assert_eq!(div.as_text(), "inf");
        assert!(div.as_boolean());
    }

    #[test]
    fn re_evaluation_is_idempotent() {
        let tree = Template::Sum(vec![Template::text("40"), Template::boolean(true), Template::number(1.0)]);
        for _ in 0..3 {
            assert_eq!(tree.as_number(), 42.0);
            assert_eq!(tree.as_text(), "42");
            assert!(tree.as_boolean());
        }
    }
}

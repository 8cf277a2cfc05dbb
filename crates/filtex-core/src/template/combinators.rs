// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Constructor functions for composite [`Template`] nodes.
//!
//! These free functions all share the two signatures the operator table
//! accepts — `fn(Template, Template) -> Template` for binary rules and
//! `fn(Vec<Template>) -> Template` for variadic rules — so each can be
//! registered directly as an operator's combining rule.

use super::{NumberOp, Template, TextOp};

fn text_compare(op: TextOp, lhs: Template, rhs: Template) -> Template {
    Template::TextCompare {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}

fn number_compare(op: NumberOp, lhs: Template, rhs: Template) -> Template {
    Template::NumberCompare {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}

/// Negates the operand's boolean view.
#[must_use]
pub fn negate(operand: Template) -> Template {
    Template::Not(Box::new(operand))
}

/// Negates the operand's numeric view.
#[must_use]
pub fn negate_number(operand: Template) -> Template {
    Template::Negate(Box::new(operand))
}

/// True if and only if every operand is true.
#[must_use]
pub fn all(operands: Vec<Template>) -> Template {
    Template::All(operands)
}

/// True if any operand is true.
#[must_use]
pub fn any(operands: Vec<Template>) -> Template {
    Template::Any(operands)
}

/// Concatenates the operands' text views.
#[must_use]
pub fn concat(operands: Vec<Template>) -> Template {
    Template::Concat(operands)
}

/// Case-sensitive text equality.
#[must_use]
pub fn equal(lhs: Template, rhs: Template) -> Template {
    text_compare(TextOp::Equal, lhs, rhs)
}

/// Case-sensitive text inequality.
#[must_use]
pub fn not_equal(lhs: Template, rhs: Template) -> Template {
    text_compare(TextOp::NotEqual, lhs, rhs)
}

/// ASCII-case-insensitive text equality.
#[must_use]
pub fn equal_ignore_case(lhs: Template, rhs: Template) -> Template {
    text_compare(TextOp::EqualIgnoreCase, lhs, rhs)
}

/// ASCII-case-insensitive text inequality.
#[must_use]
pub fn not_equal_ignore_case(lhs: Template, rhs: Template) -> Template {
    text_compare(TextOp::NotEqualIgnoreCase, lhs, rhs)
}

/// True when the left text view starts with the right one.
#[must_use]
pub fn starts_with(lhs: Template, rhs: Template) -> Template {
    text_compare(TextOp::StartsWith, lhs, rhs)
}

/// True when the left text view ends with the right one.
#[must_use]
pub fn ends_with(lhs: Template, rhs: Template) -> Template {
    text_compare(TextOp::EndsWith, lhs, rhs)
}

/// True when the left text view contains the right one.
#[must_use]
pub fn contains(lhs: Template, rhs: Template) -> Template {
    text_compare(TextOp::Contains, lhs, rhs)
}

/// Numeric greater-than.
#[must_use]
pub fn greater(lhs: Template, rhs: Template) -> Template {
    number_compare(NumberOp::Greater, lhs, rhs)
}

/// Numeric greater-or-equal.
#[must_use]
pub fn greater_or_equal(lhs: Template, rhs: Template) -> Template {
    number_compare(NumberOp::GreaterOrEqual, lhs, rhs)
}

/// Numeric less-than.
#[must_use]
pub fn less(lhs: Template, rhs: Template) -> Template {
    number_compare(NumberOp::Less, lhs, rhs)
}

/// Numeric less-or-equal.
#[must_use]
pub fn less_or_equal(lhs: Template, rhs: Template) -> Template {
    number_compare(NumberOp::LessOrEqual, lhs, rhs)
}

/// Sums the operands' numeric views.
#[must_use]
pub fn sum(operands: Vec<Template>) -> Template {
    Template::Sum(operands)
}

/// Multiplies the operands' numeric views.
#[must_use]
pub fn product(operands: Vec<Template>) -> Template {
    Template::Product(operands)
}

/// Left minus right.
#[must_use]
pub fn sub(lhs: Template, rhs: Template) -> Template {
    Template::Sub(Box::new(lhs), Box::new(rhs))
}

/// Left divided by right.
#[must_use]
pub fn div(lhs: Template, rhs: Template) -> Template {
    Template::Div(Box::new(lhs), Box::new(rhs))
}

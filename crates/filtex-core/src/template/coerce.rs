// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The coercion lattice between boolean, numeric, and textual values.
//!
//! Every [`Template`](super::Template) is tri-modal: whichever
//! representation a node natively produces, the other two views are
//! derived through the six rules here. The rules live in one place so a
//! host reading `"42" > 5` and `5 . ''` gets the same conversions the
//! literal constructors use.

use ecow::{EcoString, eco_format};

/// Boolean to number: `true` is 1, `false` is 0.
#[must_use]
pub fn boolean_to_number(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

/// Boolean to text: the canonical lowercase spelling.
#[must_use]
pub fn boolean_to_text(value: bool) -> EcoString {
    if value { "true".into() } else { "false".into() }
}

/// Number to boolean: anything but zero is true.
#[must_use]
pub fn number_to_boolean(value: f64) -> bool {
    value != 0.0
}

/// Number to text.
///
/// Integral finite values render without a decimal point (`5`, not
/// `5.0`); everything else renders with Rust's shortest round-trippable
/// float formatting. Non-finite values render as the float itself
/// (`inf`, `NaN`).
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "the bound check guarantees the value is an exact integer"
)]
pub fn number_to_text(value: f64) -> EcoString {
    if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        eco_format!("{}", value as i64)
    } else {
        eco_format!("{value}")
    }
}

/// Text to boolean: an ASCII-case-insensitive match against `true`;
/// anything else — including unparseable text — is false.
#[must_use]
pub fn text_to_boolean(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

/// Text to number.
///
/// Parses the trimmed text with a locale-independent, grouping-free
/// decimal parser. When the parse fails, the character count of the text
/// is the value — a deliberate fallback so non-numeric text still orders
/// meaningfully, not a silent zero.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "text lengths are nowhere near 2^52"
)]
pub fn text_to_number(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .unwrap_or_else(|_| value.chars().count() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_projections() {
        assert_eq!(boolean_to_number(true), 1.0);
        assert_eq!(boolean_to_number(false), 0.0);
        assert_eq!(boolean_to_text(true), "true");
        assert_eq!(boolean_to_text(false), "false");
    }

    #[test]
    fn number_to_boolean_is_nonzero() {
        assert!(number_to_boolean(1.0));
        assert!(number_to_boolean(-0.5));
        assert!(number_to_boolean(f64::NAN));
        assert!(!number_to_boolean(0.0));
        assert!(!number_to_boolean(-0.0));
    }

    #[test]
    fn integral_numbers_render_without_decimal_point() {
        assert_eq!(number_to_text(5.0), "5");
        assert_eq!(number_to_text(-3.0), "-3");
        assert_eq!(number_to_text(0.0), "0");
    }

    #[test]
    fn fractional_numbers_render_shortest_round_trip() {
        assert_eq!(number_to_text(5.5), "5.5");
        assert_eq!(number_to_text(-0.25), "-0.25");
    }

    #[test]
    fn non_finite_numbers_render_as_floats() {
        assert_eq!(number_to_text(f64::INFINITY), "inf");
        assert_eq!(number_to_text(f64::NEG_INFINITY), "-inf");
        assert_eq!(number_to_text(f64::NAN), "NaN");
    }

    #[test]
    fn text_to_boolean_matches_true_case_insensitively() {
        assert!(text_to_boolean("true"));
        assert!(text_to_boolean("TRUE"));
        assert!(text_to_boolean("True"));
        assert!(!text_to_boolean("yes"));
        assert!(!text_to_boolean("1"));
        assert!(!text_to_boolean(""));
    }

    #[test]
    fn text_to_number_parses_decimals() {
        assert_eq!(text_to_number("42"), 42.0);
        assert_eq!(text_to_number("-1.5"), -1.5);
        assert_eq!(text_to_number(" 7 "), 7.0);
    }

    #[test]
    fn text_to_number_falls_back_to_character_count() {
        assert_eq!(text_to_number("abc"), 3.0);
        assert_eq!(text_to_number(""), 0.0);
        // Character count, not byte count.
        assert_eq!(text_to_number("äöü"), 3.0);
    }
}

// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for the precedence resolver.
//!
//! These tests use `proptest` to verify resolver invariants over
//! generated inputs:
//!
//! 1. **Resolver never panics** on arbitrary token sequences
//! 2. **Produced trees evaluate** without panicking, in all three views
//! 3. **Compilation is deterministic** end to end
//! 4. **Known-good expressions compile** with no warnings
//! 5. **Failure always leaves a warning behind**

use proptest::prelude::*;

use crate::diagnostics::ParseWarnings;
use crate::engine::{Engine, default_operators, default_value_readers};
use crate::parse::{TemplateParser, TokenCursor};
use crate::tokenize::{Symbol, Token};

/// Expressions the stock engine must accept.
const VALID_EXPRESSIONS: &[&str] = &[
    "1 + 2 * 3",
    "(1 + 2) * 3",
    "true and false or true",
    "1 < 2 < 3",
    "'a' . 'b' == 'ab'",
    "!(1 > 2)",
    "-4 / 2",
    "'abc' <_ 'b'",
];

/// Expressions the stock engine must reject (with a warning).
const INVALID_EXPRESSIONS: &[&str] = &[
    "(1 + 2",
    "1 +",
    "+ 1",
    "1 2",
    "()",
    "1 + * 2",
];

fn parser() -> TemplateParser {
    TemplateParser::new(default_operators(), default_value_readers())
}

fn arbitrary_symbol() -> impl Strategy<Value = Symbol> {
    prop::sample::select(vec![
        Symbol::And,
        Symbol::Or,
        Symbol::Equal,
        Symbol::NotEqual,
        Symbol::LessThan,
        Symbol::GreaterThan,
        Symbol::OpenParen,
        Symbol::CloseParen,
        Symbol::Not,
        Symbol::Concat,
        Symbol::Add,
        Symbol::Subtract,
        Symbol::Multiply,
        Symbol::Divide,
    ])
}

fn arbitrary_token() -> impl Strategy<Value = Token> {
    prop_oneof![
        arbitrary_symbol().prop_map(Token::Symbol),
        any::<bool>().prop_map(Token::Bool),
        (-1.0e6..1.0e6).prop_map(Token::Number),
        "[a-z]{0,6}".prop_map(|s| Token::Text(s.into())),
    ]
}

proptest! {
    #[test]
    fn resolver_never_panics(tokens in prop::collection::vec(arbitrary_token(), 0..16)) {
        let mut warnings = ParseWarnings::new("generated");
        let mut cursor = TokenCursor::new(&tokens);
        if let Some(tree) = parser().parse(&mut cursor, &mut warnings) {
            // Whatever came out must evaluate in every view.
            let _ = tree.as_boolean();
            let _ = tree.as_number();
            let _ = tree.as_text();
        } else {
            prop_assert!(warnings.has_warnings());
        }
    }

    #[test]
    fn compile_never_panics(input in ".+") {
        let engine = Engine::with_defaults();
        let mut warnings = ParseWarnings::new(input.as_str());
        if let Some(tree) = engine.compile(&input, &mut warnings) {
            let _ = tree.as_boolean();
            let _ = tree.as_number();
            let _ = tree.as_text();
        }
    }

    #[test]
    fn compilation_is_deterministic(input in ".+") {
        let engine = Engine::with_defaults();
        let mut first = ParseWarnings::new(input.as_str());
        let mut second = ParseWarnings::new(input.as_str());
        let a = engine.compile(&input, &mut first);
        let b = engine.compile(&input, &mut second);
        prop_assert_eq!(a.is_some(), b.is_some());
        prop_assert_eq!(first.warnings(), second.warnings());
    }

    #[test]
    fn valid_expressions_compile_cleanly(
        input in prop::sample::select(VALID_EXPRESSIONS),
    ) {
        let engine = Engine::with_defaults();
        let mut warnings = ParseWarnings::new(input);
        let tree = engine.compile(input, &mut warnings);
        prop_assert!(tree.is_some());
        prop_assert!(!warnings.has_warnings());
    }

    #[test]
    fn invalid_expressions_warn(
        input in prop::sample::select(INVALID_EXPRESSIONS),
    ) {
        let engine = Engine::with_defaults();
        let mut warnings = ParseWarnings::new(input);
        let tree = engine.compile(input, &mut warnings);
        prop_assert!(tree.is_none());
        prop_assert!(warnings.has_warnings());
    }
}

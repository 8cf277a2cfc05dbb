// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The compile entry point and its builder.
//!
//! An [`Engine`] pairs a [`Tokenizer`] with a [`TemplateParser`]. Both
//! are fixed at build time, so one engine can be shared across threads
//! and reused for any number of independent compilations; each call to
//! [`compile`](Engine::compile) owns its own token list and warning
//! collector.
//!
//! [`EngineBuilder::with_defaults`] registers the stock language —
//! boolean logic, string comparisons, and arithmetic — and hosts can
//! extend it with extra spellings, operators, or value readers before
//! building.
//!
//! # Example
//!
//! ```
//! use filtex_core::{Engine, ParseWarnings};
//!
//! let engine = Engine::with_defaults();
//! let mut warnings = ParseWarnings::new("1 + 2 * 3");
//! let tree = engine.compile("1 + 2 * 3", &mut warnings).unwrap();
//! assert_eq!(tree.as_number(), 7.0);
//! ```

use std::collections::HashMap;

use crate::diagnostics::ParseWarnings;
use crate::parse::{Operator, TemplateParser, TokenCursor, ValueReader};
use crate::template::{Template, combinators};
use crate::tokenize::{Symbol, Token, TokenReader, Tokenizer};

/// A compiled, immutable tokenizer/parser pair.
#[derive(Debug, Clone)]
pub struct Engine {
    tokenizer: Tokenizer,
    parser: TemplateParser,
}

impl Engine {
    /// An engine with the stock language registered.
    ///
    /// Equivalent to `EngineBuilder::with_defaults().build()`.
    #[must_use]
    pub fn with_defaults() -> Self {
        EngineBuilder::with_defaults().build()
    }

    /// An empty builder, for hosts that register everything themselves.
    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Compiles `text` into an evaluation tree.
    ///
    /// Returns `None` — with the reasons recorded in `warnings` — on any
    /// lexical or structural error; malformed user input never panics.
    /// Tokenization errors still leave the parser a partial token
    /// sequence to attempt a best-effort parse on.
    ///
    /// # Panics
    ///
    /// Panics if `text` is empty, which is API misuse rather than a
    /// user-input error.
    #[must_use]
    pub fn compile(&self, text: &str, warnings: &mut ParseWarnings) -> Option<Template> {
        assert!(!text.is_empty(), "expression text must not be empty");

        let tokens = self.tokenizer.tokenize(text, warnings);
        tracing::debug!(
            source_len = text.len(),
            tokens = tokens.len(),
            "compiling expression"
        );

        let mut cursor = TokenCursor::new(&tokens);
        let template = self.parser.parse(&mut cursor, warnings);
        if warnings.has_warnings() {
            tracing::debug!(
                warnings = warnings.warnings().len(),
                produced_tree = template.is_some(),
                "expression compiled with warnings"
            );
        }
        template
    }
}

/// Registers token readers, operators, and value readers for an
/// [`Engine`].
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    token_readers: Vec<TokenReader>,
    operators: HashMap<Symbol, Operator>,
    value_readers: Vec<ValueReader>,
}

impl EngineBuilder {
    /// An empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder pre-filled with the stock language.
    ///
    /// Token readers: one pattern per operator spelling (with `and`/`&&`
    /// and `or`/`||` as alternate spellings of the same symbols), quoted
    /// text in `"` or `'` at priority −10, numbers at −50, and bare text
    /// as the −100 last resort. Operators: conjunction 100, disjunction
    /// 50, all comparisons 25, concatenation 10, addition 4, subtraction
    /// 3, multiplication 2, division 1 — lower reduces first. Value
    /// readers: the three literals, boolean negation on `!`, brackets on
    /// `(`/`)`, and numeric negation on `-`.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut builder = Self::new();
        builder.token_readers = default_token_readers();
        builder.operators = default_operators();
        builder.value_readers = default_value_readers();
        builder
    }

    /// Registers an additional token reader.
    #[must_use]
    pub fn add_token_reader(mut self, reader: TokenReader) -> Self {
        self.token_readers.push(reader);
        self
    }

    /// Registers (or replaces) the operator for a symbol.
    #[must_use]
    pub fn add_operator(mut self, symbol: Symbol, operator: Operator) -> Self {
        self.operators.insert(symbol, operator);
        self
    }

    /// Registers an additional value reader at the end of the chain.
    #[must_use]
    pub fn add_value_reader(mut self, reader: ValueReader) -> Self {
        self.value_readers.push(reader);
        self
    }

    /// Builds the engine.
    ///
    /// # Panics
    ///
    /// Panics if any registration set is empty; an engine without
    /// readers or operators is API misuse.
    #[must_use]
    pub fn build(self) -> Engine {
        Engine {
            tokenizer: Tokenizer::new(self.token_readers),
            parser: TemplateParser::new(self.operators, self.value_readers),
        }
    }
}

pub(crate) fn default_token_readers() -> Vec<TokenReader> {
    vec![
        TokenReader::pattern(Token::Bool(true), "true"),
        TokenReader::pattern(Token::Bool(false), "false"),
        TokenReader::pattern(Token::Symbol(Symbol::And), "and"),
        TokenReader::pattern(Token::Symbol(Symbol::And), "&&"),
        TokenReader::pattern(Token::Symbol(Symbol::Or), "or"),
        TokenReader::pattern(Token::Symbol(Symbol::Or), "||"),
        TokenReader::pattern(Token::Symbol(Symbol::Equal), "="),
        TokenReader::pattern(Token::Symbol(Symbol::Equal), "=="),
        TokenReader::pattern(Token::Symbol(Symbol::EqualIgnoreCase), "~"),
        TokenReader::pattern(Token::Symbol(Symbol::EqualIgnoreCase), "=~"),
        TokenReader::pattern(Token::Symbol(Symbol::NotEqual), "!="),
        TokenReader::pattern(Token::Symbol(Symbol::NotEqualIgnoreCase), "!~"),
        TokenReader::pattern(Token::Symbol(Symbol::StartsWith), "|-"),
        TokenReader::pattern(Token::Symbol(Symbol::EndsWith), "-|"),
        TokenReader::pattern(Token::Symbol(Symbol::Contains), "<_"),
        TokenReader::pattern(Token::Symbol(Symbol::GreaterThan), ">"),
        TokenReader::pattern(Token::Symbol(Symbol::GreaterOrEqual), ">="),
        TokenReader::pattern(Token::Symbol(Symbol::LessThan), "<"),
        TokenReader::pattern(Token::Symbol(Symbol::LessOrEqual), "<="),
        TokenReader::pattern(Token::Symbol(Symbol::OpenParen), "("),
        TokenReader::pattern(Token::Symbol(Symbol::CloseParen), ")"),
        TokenReader::pattern(Token::Symbol(Symbol::Not), "!"),
        TokenReader::pattern(Token::Symbol(Symbol::Concat), "."),
        TokenReader::pattern(Token::Symbol(Symbol::Add), "+"),
        TokenReader::pattern(Token::Symbol(Symbol::Subtract), "-"),
        TokenReader::pattern(Token::Symbol(Symbol::Multiply), "*"),
        TokenReader::pattern(Token::Symbol(Symbol::Divide), "/"),
        TokenReader::quoted_text(-10, '"'),
        TokenReader::quoted_text(-10, '\''),
        TokenReader::number(-50),
        TokenReader::bare_text(-100),
    ]
}

pub(crate) fn default_operators() -> HashMap<Symbol, Operator> {
    let mut operators = HashMap::new();
    operators.insert(Symbol::And, Operator::variadic(100, combinators::all));
    operators.insert(Symbol::Or, Operator::variadic(50, combinators::any));
    operators.insert(Symbol::Equal, Operator::binary(25, combinators::equal));
    operators.insert(
        Symbol::EqualIgnoreCase,
        Operator::binary(25, combinators::equal_ignore_case),
    );
    operators.insert(
        Symbol::NotEqual,
        Operator::binary(25, combinators::not_equal),
    );
    operators.insert(
        Symbol::NotEqualIgnoreCase,
        Operator::binary(25, combinators::not_equal_ignore_case),
    );
    operators.insert(
        Symbol::StartsWith,
        Operator::binary(25, combinators::starts_with),
    );
    operators.insert(
        Symbol::EndsWith,
        Operator::binary(25, combinators::ends_with),
    );
    operators.insert(
        Symbol::Contains,
        Operator::binary(25, combinators::contains),
    );
    operators.insert(
        Symbol::GreaterThan,
        Operator::binary(25, combinators::greater),
    );
    operators.insert(
        Symbol::GreaterOrEqual,
        Operator::binary(25, combinators::greater_or_equal),
    );
    operators.insert(Symbol::LessThan, Operator::binary(25, combinators::less));
    operators.insert(
        Symbol::LessOrEqual,
        Operator::binary(25, combinators::less_or_equal),
    );
    operators.insert(Symbol::Concat, Operator::variadic(10, combinators::concat));
    operators.insert(Symbol::Add, Operator::variadic(4, combinators::sum));
    operators.insert(Symbol::Subtract, Operator::binary(3, combinators::sub));
    operators.insert(
        Symbol::Multiply,
        Operator::variadic(2, combinators::product),
    );
    operators.insert(Symbol::Divide, Operator::binary(1, combinators::div));
    operators
}

pub(crate) fn default_value_readers() -> Vec<ValueReader> {
    vec![
        ValueReader::BoolLiteral,
        ValueReader::NumberLiteral,
        ValueReader::TextLiteral,
        ValueReader::Negation(Symbol::Not),
        ValueReader::Parenthesised {
            open: Symbol::OpenParen,
            close: Symbol::CloseParen,
        },
        ValueReader::NegatedNumber(Symbol::Subtract),
    ]
}

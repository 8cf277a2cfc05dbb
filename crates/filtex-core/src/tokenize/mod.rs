// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Tokenization of filter expression source text.
//!
//! This module converts source text into an ordered sequence of
//! [`Token`]s using a priority-ordered set of [`TokenReader`]s.
//!
//! # Lexical Analysis
//!
//! The [`Tokenizer`] tries each registered reader at the current scan
//! position, highest priority first, and the first reader that recognizes
//! something wins. This makes the token vocabulary a registration concern
//! rather than a hard-coded grammar: hosts add spellings (or whole new
//! readers) through the [`EngineBuilder`](crate::EngineBuilder).
//!
//! ```
//! use filtex_core::diagnostics::ParseWarnings;
//! use filtex_core::tokenize::{Symbol, Token, TokenReader, Tokenizer};
//!
//! let tokenizer = Tokenizer::new(vec![
//!     TokenReader::pattern(Token::Symbol(Symbol::Add), "+"),
//!     TokenReader::number(-50),
//! ]);
//!
//! let mut warnings = ParseWarnings::new("1 + 2");
//! let tokens = tokenizer.tokenize("1 + 2", &mut warnings);
//! assert_eq!(tokens.len(), 3);
//! ```

mod reader;
mod token;
mod tokenizer;

pub use reader::TokenReader;
pub use token::{Symbol, Token};
pub use tokenizer::Tokenizer;

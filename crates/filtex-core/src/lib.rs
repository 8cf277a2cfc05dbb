// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Filter expression compiler core.
//!
//! This crate contains the complete text-to-tree pipeline:
//! - Tokenization (priority-ordered token readers)
//! - Parsing (precedence resolution into an evaluation tree)
//! - Evaluation (tri-modal boolean/number/text views with coercion)
//!
//! The compiler is designed for embedding: malformed user input never
//! panics, diagnostics accumulate in a caller-supplied collector, and a
//! compiled [`Engine`] or [`Template`] is immutable and freely shareable
//! across threads.

#![doc = include_str!("../../../README.md")]

pub mod diagnostics;
pub mod engine;
pub mod parse;
pub mod template;
pub mod tokenize;

pub use diagnostics::{ParseWarnings, Warning};
pub use engine::{Engine, EngineBuilder};
pub use template::Template;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::diagnostics::{ParseWarnings, Warning};
    pub use crate::engine::{Engine, EngineBuilder};
    pub use crate::template::Template;
    pub use crate::tokenize::{Symbol, Token};
}

// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The precedence resolver.
//!
//! Parsing happens in two phases. First the parser alternates between
//! reading a value (through the [`ValueReader`] chain) and an operator
//! (through the registered table), accumulating an interleaved
//! `value, op, value, op, value, ...` record. Then it reduces: as long as
//! operators remain, it finds the first-occurring maximal contiguous run
//! of minimum-priority operators and collapses it into a single node.
//!
//! A run of one operator is an ordinary binary combine. A longer run of a
//! variadic operator collapses into one n-ary node over the whole span. A
//! longer run of a binary-only operator — a chained comparison like
//! `a < b < c` — becomes one combine per adjacent pair, joined under a
//! single conjunction node.

use std::collections::HashMap;

use crate::diagnostics::ParseWarnings;
use crate::template::{Template, combinators};
use crate::tokenize::Symbol;

use super::{Operator, ReadValue, TokenCursor, ValueReader};

/// Parses token sequences into [`Template`] trees.
///
/// The operator table and value-reader chain are fixed at construction;
/// a parser is immutable afterwards and safe to share across threads.
/// Each call to [`parse`](Self::parse) owns its own cursor and warning
/// collector.
#[derive(Debug, Clone)]
pub struct TemplateParser {
    operators: HashMap<Symbol, Operator>,
    value_readers: Vec<ValueReader>,
}

impl TemplateParser {
    /// Creates a parser from an operator table and a value-reader chain.
    ///
    /// # Panics
    ///
    /// Panics if either registration set is empty; that is API misuse.
    #[must_use]
    pub fn new(operators: HashMap<Symbol, Operator>, value_readers: Vec<ValueReader>) -> Self {
        assert!(!operators.is_empty(), "operators must not be empty");
        assert!(!value_readers.is_empty(), "value readers must not be empty");
        Self {
            operators,
            value_readers,
        }
    }

    /// Parses the cursor's tokens into a single tree.
    ///
    /// Consumes tokens front-to-back; on success the cursor is fully
    /// consumed. Any structural error is appended to `warnings` and
    /// `None` is returned.
    #[must_use]
    pub fn parse(
        &self,
        cursor: &mut TokenCursor<'_>,
        warnings: &mut ParseWarnings,
    ) -> Option<Template> {
        let mut parts = vec![self.read_value(cursor, warnings)?];
        let mut operators = Vec::new();

        while let Some(token) = cursor.pop() {
            let operator = token
                .as_symbol()
                .and_then(|symbol| self.operators.get(&symbol).copied());
            let Some(operator) = operator else {
                warnings.warn(format!("expected an operator, found '{token}'"));
                return None;
            };
            operators.push(operator);

            if cursor.is_empty() {
                warnings.warn("unexpected end of input");
                return None;
            }
            parts.push(self.read_value(cursor, warnings)?);
        }

        Some(reduce(parts, operators))
    }

    /// Reads one value via the reader chain, first match wins.
    fn read_value(
        &self,
        cursor: &mut TokenCursor<'_>,
        warnings: &mut ParseWarnings,
    ) -> Option<Template> {
        for reader in &self.value_readers {
            match reader.read(self, cursor, warnings) {
                ReadValue::Value(template) => return Some(template),
                ReadValue::Failed => return None,
                ReadValue::NoMatch => {}
            }
        }
        match cursor.peek() {
            Some(token) => warnings.warn(format!("expected a value, found '{token}'")),
            None => warnings.warn("unexpected end of input"),
        }
        None
    }
}

/// Collapses the interleaved value/operator record into a single node.
///
/// Requires `parts.len() == operators.len() + 1`, which the parse loop
/// guarantees.
fn reduce(mut parts: Vec<Template>, mut operators: Vec<Operator>) -> Template {
    while !operators.is_empty() {
        // Find the first-occurring maximal run of minimum-priority
        // operators: an equal priority extends the run, a lower one
        // restarts it, a higher one ends the scan.
        let mut lowest = operators[0].priority();
        let mut start = 0;
        let mut end = 1;
        for (index, operator) in operators.iter().enumerate().skip(1) {
            if operator.priority() < lowest {
                lowest = operator.priority();
                start = index;
                end = index + 1;
            } else if operator.priority() > lowest {
                break;
            } else {
                end += 1;
            }
        }

        let run: Vec<Operator> = operators.drain(start..end).collect();
        let mut operands: Vec<Template> = parts.drain(start..=end).collect();

        let replacement = if run.len() == 1 {
            let rhs = operands.pop().expect("a run spans two operands");
            let lhs = operands.pop().expect("a run spans two operands");
            run[0].combine_pair(lhs, rhs)
        } else if let Some(combine) = run[0].as_variadic() {
            combine(operands)
        } else {
            // Chained binary-only operators: one combine per adjacent
            // pair, all joined under a single conjunction.
            let mut conditions = Vec::with_capacity(run.len());
            let mut operands = operands.into_iter();
            let mut lhs = operands.next().expect("a run spans two operands");
            for (operator, rhs) in run.iter().zip(operands) {
                conditions.push(operator.combine_pair(lhs, rhs.clone()));
                lhs = rhs;
            }
            combinators::all(conditions)
        };

        parts.insert(start, replacement);
    }

    debug_assert_eq!(parts.len(), 1);
    parts.pop().expect("reduction leaves exactly one value")
}

// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Operator table entries.
//!
//! An [`Operator`] pairs a priority with a combining rule. Binary rules
//! combine exactly two nodes; variadic rules combine an ordered run of
//! two or more. A variadic operator used in a binary position simply
//! wraps the pair into a length-2 run.
//!
//! Combining rules are plain function pointers — typically the
//! constructors in [`combinators`](crate::template::combinators) — so an
//! operator is `Copy` and the whole table is immutable shared data.

use crate::template::Template;

/// A binary combining rule.
pub type BinaryFn = fn(Template, Template) -> Template;

/// A variadic combining rule over an ordered run of operands.
pub type VariadicFn = fn(Vec<Template>) -> Template;

#[derive(Debug, Clone, Copy)]
enum Combine {
    Binary(BinaryFn),
    Variadic(VariadicFn),
}

/// A priority-tagged combining rule, registered against a
/// [`Symbol`](crate::tokenize::Symbol) in the operator table.
///
/// The resolver collapses the numerically lowest-priority run first, so a
/// lower priority binds tighter: the stock table gives division priority
/// 1 (tightest) and conjunction 100 (loosest, nearest the root). The
/// exact numbers are a registration choice, not part of the algorithm.
#[derive(Debug, Clone, Copy)]
pub struct Operator {
    priority: i32,
    combine: Combine,
}

impl Operator {
    /// Creates a binary operator.
    #[must_use]
    pub const fn binary(priority: i32, combine: BinaryFn) -> Self {
        Self {
            priority,
            combine: Combine::Binary(combine),
        }
    }

    /// Creates a variadic operator.
    #[must_use]
    pub const fn variadic(priority: i32, combine: VariadicFn) -> Self {
        Self {
            priority,
            combine: Combine::Variadic(combine),
        }
    }

    /// The operator's priority; lower is reduced first and binds tighter.
    #[must_use]
    pub const fn priority(&self) -> i32 {
        self.priority
    }

    /// The variadic combining rule, if this operator has one.
    #[must_use]
    pub const fn as_variadic(&self) -> Option<VariadicFn> {
        match self.combine {
            Combine::Variadic(combine) => Some(combine),
            Combine::Binary(_) => None,
        }
    }

    /// Combines exactly two operands.
    ///
    /// A variadic operator wraps the pair into a length-2 run.
    #[must_use]
    pub fn combine_pair(&self, lhs: Template, rhs: Template) -> Template {
        match self.combine {
            Combine::Binary(combine) => combine(lhs, rhs),
            Combine::Variadic(combine) => combine(vec![lhs, rhs]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::combinators;

    #[test]
    fn binary_operator_combines_a_pair() {
        let op = Operator::binary(3, combinators::sub);
        assert_eq!(op.priority(), 3);
        assert!(op.as_variadic().is_none());
        let tree = op.combine_pair(Template::number(5.0), Template::number(2.0));
        assert_eq!(tree.as_number(), 3.0);
    }

    #[test]
    fn variadic_operator_combines_a_run() {
        let op = Operator::variadic(4, combinators::sum);
        let combine = op.as_variadic().unwrap();
        let tree = combine(vec![
            Template::number(1.0),
            Template::number(2.0),
            Template::number(3.0),
        ]);
        assert_eq!(tree.as_number(), 6.0);
    }

    #[test]
    fn variadic_operator_used_as_binary_wraps_the_pair() {
        let op = Operator::variadic(4, combinators::sum);
        let tree = op.combine_pair(Template::number(1.0), Template::number(2.0));
        assert_eq!(tree, Template::Sum(vec![Template::number(1.0), Template::number(2.0)]));
    }
}

//! Expression evaluation against vendor records.
//!
//! A criterion matches when its value is a substring of the lower-cased
//! `industry`, `certifications`, `keywords`, `country`, `state` or `city`
//! field. Containment is deliberate: `sec` matches `cybersecurity`.
//! Criterion values arrive lower-cased from [`Expr::criterion`], so only the
//! record side is folded.
//!
//! # Example
//!
//! ```
//! use vendor_filter::filter::{ExpressionParser, ExpressionEvaluator};
//! use vendor_filter::VendorRecord;
//!
//! let expr = ExpressionParser::parse("cybersecurity AND NOT retail").unwrap();
//! let records = vec![
//!     VendorRecord::new().with("industry", "Cybersecurity").with("keywords", "SIEM WAF"),
//!     VendorRecord::new().with("industry", "cybersecurity").with("keywords", "retail POS"),
//! ];
//!
//! let evaluator = ExpressionEvaluator::new(&expr);
//! assert_eq!(evaluator.filter_indices(&records), vec![0]);
//! ```

use tracing::trace;

use super::ast::{BinaryOperator, Expr};
use crate::fuzzy::FallbackMatcher;
use crate::record::{RecordFields, MATCH_FIELDS};

/// Evaluates a parsed expression against records.
pub struct ExpressionEvaluator<'a> {
    expr: &'a Expr,
    fallback: Option<&'a dyn FallbackMatcher>,
}

impl std::fmt::Debug for ExpressionEvaluator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpressionEvaluator")
            .field("expr", self.expr)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

impl<'a> ExpressionEvaluator<'a> {
    /// Creates an evaluator using exact substring matching only.
    pub fn new(expr: &'a Expr) -> Self {
        Self {
            expr,
            fallback: None,
        }
    }

    /// Adds a fallback matcher for criteria with no substring match.
    pub fn with_fallback(mut self, fallback: &'a dyn FallbackMatcher) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Returns true if the record matches the expression.
    pub fn matches<R: RecordFields + ?Sized>(&self, record: &R) -> bool {
        self.evaluate(self.expr, record)
    }

    /// Returns the indices of matching records in ascending order.
    pub fn filter_indices<R: RecordFields>(&self, records: &[R]) -> Vec<usize> {
        records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.matches(*record))
            .map(|(i, _)| i)
            .collect()
    }

    /// Returns the matching records themselves, in input order.
    pub fn filter_records<'r, R: RecordFields>(&self, records: &'r [R]) -> Vec<&'r R> {
        records.iter().filter(|record| self.matches(*record)).collect()
    }

    fn evaluate<R: RecordFields + ?Sized>(&self, expr: &Expr, record: &R) -> bool {
        match expr {
            Expr::Criterion { value } => self.matches_criterion(value, record),
            Expr::Not { operand } => !self.evaluate(operand, record),
            Expr::Binary { op, left, right } => {
                let left = self.evaluate(left, record);
                match op {
                    BinaryOperator::And => left && self.evaluate(right, record),
                    BinaryOperator::Or => left || self.evaluate(right, record),
                }
            }
        }
    }

    fn matches_criterion<R: RecordFields + ?Sized>(&self, criterion: &str, record: &R) -> bool {
        let direct = MATCH_FIELDS
            .iter()
            .any(|name| record.field(name).to_lowercase().contains(criterion));
        if direct {
            return true;
        }

        match self.fallback {
            Some(fallback) => {
                let industry = record.field("industry");
                let hit = fallback.matches(criterion, &industry);
                if hit {
                    trace!(criterion = %criterion, industry = %industry, "fallback match");
                }
                hit
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod tests;

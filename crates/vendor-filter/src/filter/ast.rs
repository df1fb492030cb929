//! Abstract Syntax Tree (AST) for criteria expressions.

use std::fmt;

use serde::Serialize;

/// A binary Boolean operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BinaryOperator {
    /// Both operands must match.
    And,
    /// Either operand may match.
    Or,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOperator::And => f.write_str("AND"),
            BinaryOperator::Or => f.write_str("OR"),
        }
    }
}

/// Represents a parsed criteria expression.
///
/// Each node owns its children, so the AST is always a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expr {
    /// A single search term, lower-cased and trimmed.
    Criterion {
        /// The normalized term.
        value: String,
    },

    /// Logical NOT of an expression.
    Not {
        /// The negated expression.
        operand: Box<Expr>,
    },

    /// Logical AND/OR of two expressions.
    Binary {
        /// The operator joining the two sides.
        op: BinaryOperator,
        /// Left operand.
        left: Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
    },
}

impl Expr {
    /// Creates a criterion leaf. The value is trimmed and lower-cased here,
    /// which is the only place terms are normalized.
    ///
    /// # Example
    ///
    /// ```
    /// use vendor_filter::filter::Expr;
    ///
    /// let expr = Expr::criterion("  ISO27001 ");
    /// assert_eq!(expr, Expr::Criterion { value: "iso27001".to_string() });
    /// ```
    pub fn criterion(value: &str) -> Self {
        Expr::Criterion {
            value: value.trim().to_lowercase(),
        }
    }

    /// Creates an AND expression from two expressions.
    pub fn and(left: Expr, right: Expr) -> Self {
        Expr::binary(BinaryOperator::And, left, right)
    }

    /// Creates an OR expression from two expressions.
    pub fn or(left: Expr, right: Expr) -> Self {
        Expr::binary(BinaryOperator::Or, left, right)
    }

    /// Creates a binary expression.
    pub fn binary(op: BinaryOperator, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Creates a NOT expression.
    ///
    /// # Example
    ///
    /// ```
    /// use vendor_filter::filter::Expr;
    ///
    /// let expr = Expr::negate(Expr::criterion("retail"));
    /// assert!(matches!(expr, Expr::Not { .. }));
    /// ```
    pub fn negate(operand: Expr) -> Self {
        Expr::Not {
            operand: Box::new(operand),
        }
    }

    /// Returns every criterion value in left-to-right order, duplicates included.
    pub fn criteria(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_criteria(&mut out);
        out
    }

    fn collect_criteria<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Expr::Criterion { value } => out.push(value),
            Expr::Not { operand } => operand.collect_criteria(out),
            Expr::Binary { left, right, .. } => {
                left.collect_criteria(out);
                right.collect_criteria(out);
            }
        }
    }
}

/// Renders the expression with every binary node parenthesized, e.g.
/// `(cybersecurity OR (iso27001 AND NOT banking))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Criterion { value } => f.write_str(value),
            Expr::Not { operand } => write!(f, "NOT {operand}"),
            Expr::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
        }
    }
}

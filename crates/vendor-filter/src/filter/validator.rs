//! Fast structural check run on the raw expression before parsing.
//!
//! The validator re-scans the string with simpler rules than the lexer so that
//! obviously malformed input is rejected with a readable message. Passing
//! validation does not guarantee that parsing succeeds: parenthesis placement
//! relative to operators is left to the parser.

use super::error::ValidationError;

/// Outcome of [`SyntaxValidator::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the expression passed every check.
    pub valid: bool,
    /// Reason for rejection; empty iff `valid`.
    pub message: String,
}

impl From<Result<(), ValidationError>> for ValidationResult {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self {
                valid: true,
                message: String::new(),
            },
            Err(e) => Self {
                valid: false,
                message: e.to_string(),
            },
        }
    }
}

/// Pre-parse syntax checks.
pub struct SyntaxValidator;

impl SyntaxValidator {
    /// Validates an expression, returning a verdict with a message.
    ///
    /// # Example
    ///
    /// ```
    /// use vendor_filter::filter::SyntaxValidator;
    ///
    /// let result = SyntaxValidator::validate("AND cybersecurity");
    /// assert!(!result.valid);
    /// assert_eq!(result.message, "'AND' cannot be first or last");
    /// ```
    pub fn validate(expression: &str) -> ValidationResult {
        Self::check(expression).into()
    }

    /// Runs the checks in order; the first failure wins.
    ///
    /// 1. Parentheses are balanced and never close before they open.
    /// 2. At least one word remains once parentheses are removed.
    /// 3. `AND`/`OR` are never first, last, or adjacent to each other; `NOT`
    ///    is never last and never directly before `AND`/`OR`.
    pub fn check(expression: &str) -> Result<(), ValidationError> {
        Self::check_parentheses(expression)?;

        let words: Vec<&str> = expression
            .split(['(', ')'])
            .flat_map(str::split_whitespace)
            .collect();

        if words.is_empty() {
            return Err(ValidationError::EmptyExpression);
        }

        Self::check_operator_placement(&words)
    }

    fn check_parentheses(expression: &str) -> Result<(), ValidationError> {
        let mut depth: usize = 0;
        for (position, c) in expression.chars().enumerate() {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth = depth
                        .checked_sub(1)
                        .ok_or(ValidationError::UnmatchedCloseParen { position })?;
                }
                _ => {}
            }
        }

        if depth != 0 {
            return Err(ValidationError::UnmatchedParentheses);
        }
        Ok(())
    }

    fn check_operator_placement(words: &[&str]) -> Result<(), ValidationError> {
        let last = words.len() - 1;

        for (i, word) in words.iter().enumerate() {
            let upper = word.to_uppercase();

            if is_binary_operator(&upper) {
                if i == 0 || i == last {
                    return Err(ValidationError::OperatorAtBoundary {
                        word: word.to_string(),
                    });
                }

                let prev = words[i - 1];
                if is_binary_operator(&prev.to_uppercase()) {
                    return Err(ValidationError::ConsecutiveOperators {
                        word: word.to_string(),
                        prev: prev.to_string(),
                    });
                }
            }

            if upper == "NOT" {
                if i == last {
                    return Err(ValidationError::DanglingNot);
                }

                let next = words[i + 1].to_uppercase();
                if is_binary_operator(&next) {
                    return Err(ValidationError::NotBeforeOperator { next });
                }
            }
        }

        Ok(())
    }
}

fn is_binary_operator(upper: &str) -> bool {
    upper == "AND" || upper == "OR"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejects(expression: &str) -> String {
        let result = SyntaxValidator::validate(expression);
        assert!(!result.valid, "expected '{expression}' to be rejected");
        result.message
    }

    #[test]
    fn test_valid_expressions() {
        for expr in [
            "cybersecurity",
            "cybersecurity AND ISO27001",
            "(cybersecurity OR SIEM) AND ISO27001 AND NOT banking",
            "NOT NOT retail",
            "a and (b or not c)",
        ] {
            let result = SyntaxValidator::validate(expr);
            assert!(result.valid, "expected '{expr}' to be valid: {}", result.message);
            assert!(result.message.is_empty());
        }
    }

    #[test]
    fn test_unmatched_open_paren() {
        assert_eq!(rejects("(cybersecurity AND ISO27001"), "Unmatched parentheses");
    }

    #[test]
    fn test_unmatched_close_paren_reports_position() {
        assert_eq!(
            rejects("cybersecurity AND ISO27001)"),
            "Unmatched ')' at position 26"
        );
        assert_eq!(rejects(")a("), "Unmatched ')' at position 0");
    }

    #[test]
    fn test_paren_check_runs_first() {
        // Both an operator problem and a paren problem: parens win.
        assert_eq!(rejects("AND (a"), "Unmatched parentheses");
    }

    #[test]
    fn test_empty_expression() {
        assert_eq!(rejects(""), "Empty expression");
        assert_eq!(rejects("   "), "Empty expression");
        assert_eq!(rejects("( )"), "Empty expression");
    }

    #[test]
    fn test_operator_first_or_last() {
        assert_eq!(rejects("AND cybersecurity"), "'AND' cannot be first or last");
        assert_eq!(rejects("cybersecurity or"), "'or' cannot be first or last");
        assert!(rejects("(OR a)").contains("first"));
    }

    #[test]
    fn test_consecutive_operators() {
        assert_eq!(
            rejects("cybersecurity AND OR ISO27001"),
            "'OR' cannot follow 'AND'"
        );
        assert_eq!(
            rejects("cybersecurity AND AND ISO27001"),
            "'AND' cannot follow 'AND'"
        );
        // Parentheses are ignored when checking adjacency.
        assert_eq!(rejects("a AND (OR b)"), "'OR' cannot follow 'AND'");
    }

    #[test]
    fn test_not_placement() {
        assert_eq!(
            rejects("cybersecurity AND NOT"),
            "NOT must be followed by criterion"
        );
        assert_eq!(rejects("NOT and banking"), "NOT cannot be followed by 'AND'");
    }

    #[test]
    fn test_validation_is_repeatable() {
        for expr in ["a AND", "(a", "a OR b", ""] {
            assert_eq!(SyntaxValidator::validate(expr), SyntaxValidator::validate(expr));
        }
    }

    #[test]
    fn test_unequal_paren_counts_always_rejected() {
        for expr in ["((a)", "(a))", "a)", "(((", ")))", "(a OR (b AND c)"] {
            let message = rejects(expr);
            assert!(message.contains("Unmatched"), "{expr}: {message}");
        }
    }
}

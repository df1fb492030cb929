//! Error types for expression validation and parsing.

use thiserror::Error;

/// A specialized Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Structural problems found by the pre-parse syntax check.
///
/// The `Display` text of each variant is the message reported to callers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A `)` appeared with no matching `(` before it.
    #[error("Unmatched ')' at position {position}")]
    UnmatchedCloseParen {
        /// The 0-indexed character offset of the stray `)`.
        position: usize,
    },

    /// More `(` than `)` once the whole expression was scanned.
    #[error("Unmatched parentheses")]
    UnmatchedParentheses,

    /// No words remain once parentheses and whitespace are removed.
    #[error("Empty expression")]
    EmptyExpression,

    /// `AND`/`OR` opened or closed the expression.
    #[error("'{word}' cannot be first or last")]
    OperatorAtBoundary {
        /// The operator as written.
        word: String,
    },

    /// `AND`/`OR` directly after another `AND`/`OR`.
    #[error("'{word}' cannot follow '{prev}'")]
    ConsecutiveOperators {
        /// The second operator as written.
        word: String,
        /// The operator before it as written.
        prev: String,
    },

    /// `NOT` was the last word.
    #[error("NOT must be followed by criterion")]
    DanglingNot,

    /// `NOT` directly before `AND`/`OR`.
    #[error("NOT cannot be followed by '{next}'")]
    NotBeforeOperator {
        /// The following operator, upper-cased.
        next: String,
    },
}

/// Errors raised while building an AST from a token stream.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A token that cannot start an operand.
    #[error("Unexpected token: {token}")]
    UnexpectedToken {
        /// Text of the offending token.
        token: String,
        /// Character offset of the token.
        position: usize,
    },

    /// The token stream ended where an operand was required.
    #[error("Unexpected end of expression")]
    UnexpectedEndOfInput,

    /// A parenthesized group was not closed.
    #[error("Expected ')', got {found}")]
    MissingCloseParen {
        /// Text of the token found instead, or `end of expression`.
        found: String,
    },

    /// Groups, NOTs or operator chains nest past the parser's limit.
    #[error("Expression nested too deeply (limit {limit})")]
    NestingTooDeep {
        /// The nesting limit that was exceeded.
        limit: usize,
        /// Character offset of the token that crossed the limit.
        position: usize,
    },

    /// A complete expression was followed by more tokens.
    #[error("Unexpected token after expression: {token}")]
    TrailingInput {
        /// Text of the first leftover token.
        token: String,
        /// Character offset of the token.
        position: usize,
    },
}

impl ParseError {
    /// Creates an unexpected token error.
    pub fn unexpected_token(token: impl Into<String>, position: usize) -> Self {
        ParseError::UnexpectedToken {
            token: token.into(),
            position,
        }
    }

    /// Creates a missing close parenthesis error.
    pub fn missing_close_paren(found: impl Into<String>) -> Self {
        ParseError::MissingCloseParen {
            found: found.into(),
        }
    }
}

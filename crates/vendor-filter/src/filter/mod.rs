//! Boolean criteria expressions over vendor records.
//!
//! An expression combines search terms with `AND`, `OR`, `NOT` and
//! parentheses, e.g. `(cybersecurity OR compliance) AND Malaysia AND NOT banking`.
//! Operators are case-insensitive; every other word is a criterion matched
//! by case-insensitive substring against a record's industry, certifications,
//! keywords and location fields.
//!
//! # Pipeline
//!
//! 1. [`SyntaxValidator`] rejects malformed strings cheaply.
//! 2. [`Lexer`] turns the string into [`Token`]s.
//! 3. [`ExpressionParser`] builds an [`Expr`] tree.
//! 4. [`ConflictDetector`] reports mutually exclusive or contradictory criteria.
//! 5. [`ExpressionEvaluator`] tests records against the tree.
//!
//! [`FilterEngine`] runs the whole pipeline and reports problems as messages.
//!
//! # Precedence
//!
//! `NOT` binds tighter than `AND`, which binds tighter than `OR`, so
//! `a OR b AND NOT c` means `a OR (b AND (NOT c))`.
//!
//! # Example
//!
//! ```
//! use vendor_filter::filter::{FilterEngine, BinaryOperator, Expr};
//!
//! let engine = FilterEngine::new();
//! let outcome = engine.parse_and_validate("cybersecurity OR ISO27001 AND banking");
//! assert!(outcome.errors.is_empty());
//!
//! match outcome.ast {
//!     Some(Expr::Binary { op: BinaryOperator::Or, right, .. }) => {
//!         assert!(matches!(*right, Expr::Binary { op: BinaryOperator::And, .. }));
//!     }
//!     other => panic!("unexpected AST: {other:?}"),
//! }
//! ```

mod ast;
mod conflict;
mod engine;
mod error;
mod evaluator;
mod lexer;
mod parser;
mod validator;

pub use ast::{BinaryOperator, Expr};
pub use conflict::ConflictDetector;
pub use engine::{FilterEngine, FilterOutcome, ParseOutcome};
pub use error::{ParseError, ParseResult, ValidationError};
pub use evaluator::ExpressionEvaluator;
pub use lexer::{tokenize, Lexer, Token, TokenKind};
pub use parser::{ExpressionParser, MAX_NESTING_DEPTH};
pub use validator::{SyntaxValidator, ValidationResult};

//! Single entry point combining validation, parsing, analysis and evaluation.
//!
//! Nothing here returns `Err`: every problem is reported as a message in the
//! returned outcome. Structural problems stop processing and leave no AST;
//! conflicts and contradictions are warnings that travel alongside the AST
//! and the matches.

use serde::Serialize;
use tracing::debug;

use super::ast::Expr;
use super::conflict::ConflictDetector;
use super::evaluator::ExpressionEvaluator;
use super::lexer::tokenize;
use super::parser::ExpressionParser;
use super::validator::SyntaxValidator;
use crate::fuzzy::FallbackMatcher;
use crate::record::RecordFields;
use crate::taxonomy::ExclusionTable;

/// Result of [`FilterEngine::parse_and_validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseOutcome {
    /// The parsed expression, absent after a structural error.
    pub ast: Option<Expr>,
    /// The structural error, or any conflict/contradiction warnings.
    pub errors: Vec<String>,
}

impl ParseOutcome {
    fn failed(message: String) -> Self {
        Self {
            ast: None,
            errors: vec![message],
        }
    }

    /// Returns true if an AST was produced.
    pub fn is_parsed(&self) -> bool {
        self.ast.is_some()
    }

    /// Returns true if an AST was produced with no warnings.
    pub fn is_clean(&self) -> bool {
        self.ast.is_some() && self.errors.is_empty()
    }
}

/// Result of [`FilterEngine::filter_records`].
///
/// An empty match list with no errors means the expression was fine and
/// simply matched nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOutcome {
    /// Indices of matching records, ascending.
    pub matching_indices: Vec<usize>,
    /// The structural error, or any conflict/contradiction warnings.
    pub errors: Vec<String>,
    /// Whether the expression was parsed and evaluated.
    pub evaluated: bool,
}

/// Boolean filter engine.
///
/// Holds the exclusion table and the optional fallback matcher; every call is
/// otherwise independent, so one engine can serve many threads.
///
/// # Example
///
/// ```
/// use vendor_filter::{FilterEngine, VendorRecord};
///
/// let engine = FilterEngine::new();
/// let records = vec![
///     VendorRecord::new().with("industry", "cybersecurity").with("country", "Malaysia"),
///     VendorRecord::new().with("industry", "compliance").with("country", "Singapore"),
///     VendorRecord::new().with("industry", "banking").with("country", "Malaysia"),
/// ];
///
/// let outcome = engine.filter_records("(cybersecurity OR compliance) AND Malaysia", &records);
/// assert_eq!(outcome.matching_indices, vec![0]);
/// assert!(outcome.errors.is_empty());
/// ```
#[derive(Default)]
pub struct FilterEngine {
    detector: ConflictDetector,
    fallback: Option<Box<dyn FallbackMatcher>>,
}

impl std::fmt::Debug for FilterEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterEngine")
            .field("detector", &self.detector)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

impl FilterEngine {
    /// Creates an engine with the default exclusion table and exact matching.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the exclusion table used for conflict detection.
    pub fn with_exclusions(mut self, exclusions: ExclusionTable) -> Self {
        self.detector = ConflictDetector::new(exclusions);
        self
    }

    /// Installs a fallback matcher for criteria with no substring match.
    pub fn with_fallback(mut self, fallback: impl FallbackMatcher + 'static) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }

    /// Returns the conflict detector in use.
    pub fn detector(&self) -> &ConflictDetector {
        &self.detector
    }

    /// Validates, parses and analyses an expression.
    ///
    /// Stops at the first structural error, which becomes the only message.
    /// Otherwise returns the AST with conflict messages followed by
    /// contradiction messages.
    pub fn parse_and_validate(&self, expression: &str) -> ParseOutcome {
        if let Err(e) = SyntaxValidator::check(expression) {
            debug!(expression, error = %e, "expression rejected by validator");
            return ParseOutcome::failed(e.to_string());
        }

        let tokens = tokenize(expression);
        let ast = match ExpressionParser::new(&tokens).parse_all() {
            Ok(ast) => ast,
            Err(e) => {
                debug!(expression, error = %e, "expression failed to parse");
                return ParseOutcome::failed(e.to_string());
            }
        };

        let mut errors = self.detector.detect_conflicts(&ast);
        errors.extend(self.detector.check_contradictions(&ast));
        if !errors.is_empty() {
            debug!(expression, warnings = errors.len(), "expression has semantic warnings");
        }

        ParseOutcome {
            ast: Some(ast),
            errors,
        }
    }

    /// Parses an expression and returns the indices of matching records.
    ///
    /// Records are evaluated even when the expression carries conflict or
    /// contradiction warnings; those warnings are returned alongside.
    pub fn filter_records<R: RecordFields>(&self, expression: &str, records: &[R]) -> FilterOutcome {
        let ParseOutcome { ast, errors } = self.parse_and_validate(expression);

        let Some(ast) = ast else {
            return FilterOutcome {
                matching_indices: Vec::new(),
                errors,
                evaluated: false,
            };
        };

        let matching_indices = self.evaluator(&ast).filter_indices(records);
        debug!(
            expression,
            records = records.len(),
            matches = matching_indices.len(),
            "filtered records"
        );

        FilterOutcome {
            matching_indices,
            errors,
            evaluated: true,
        }
    }

    /// Returns an evaluator for an already parsed expression, sharing this
    /// engine's fallback matcher.
    pub fn evaluator<'a>(&'a self, ast: &'a Expr) -> ExpressionEvaluator<'a> {
        let evaluator = ExpressionEvaluator::new(ast);
        match &self.fallback {
            Some(fallback) => evaluator.with_fallback(fallback.as_ref()),
            None => evaluator,
        }
    }
}

//! Static analysis of parsed expressions.
//!
//! Two advisory checks run over an AST without evaluating it:
//!
//! - **Conflicts**: criteria joined by AND that the [`ExclusionTable`] marks as
//!   mutually exclusive.
//! - **Contradictions**: a criterion that appears both plain and under an odd
//!   number of NOTs.
//!
//! Both return message lists and never fail.

use std::collections::{BTreeSet, HashSet};

use super::ast::{BinaryOperator, Expr};
use crate::taxonomy::ExclusionTable;

/// Detects conflicting and contradictory criteria.
#[derive(Debug, Clone, Default)]
pub struct ConflictDetector {
    exclusions: ExclusionTable,
}

impl ConflictDetector {
    /// Creates a detector using the given exclusion table.
    pub fn new(exclusions: ExclusionTable) -> Self {
        Self { exclusions }
    }

    /// Returns the exclusion table in use.
    pub fn exclusions(&self) -> &ExclusionTable {
        &self.exclusions
    }

    /// Reports every excluded pair found together in an AND-group.
    ///
    /// AND-groups are built by combining the groups of both sides of every AND
    /// node, while each side of an OR starts its own groups. NOT is looked
    /// through. `(a OR b) AND c` therefore has the groups `[a, c]` and `[b, c]`.
    /// Each pair is reported once, in table order, however many groups hold it.
    ///
    /// # Example
    ///
    /// ```
    /// use vendor_filter::filter::{ConflictDetector, ExpressionParser};
    ///
    /// let expr = ExpressionParser::parse("cybersecurity AND banking").unwrap();
    /// let conflicts = ConflictDetector::default().detect_conflicts(&expr);
    /// assert_eq!(conflicts.len(), 1);
    /// ```
    pub fn detect_conflicts(&self, expr: &Expr) -> Vec<String> {
        let terms: HashSet<&str> = self
            .exclusions
            .pairs()
            .flat_map(|(a, b)| [a, b])
            .collect();
        let groups = and_groups(expr, &terms);

        self.exclusions
            .pairs()
            .filter(|(a, b)| groups.iter().any(|g| g.contains(a) && g.contains(b)))
            .map(|(a, b)| {
                format!("Conflicting criteria: '{a}' AND '{b}' (usually mutually exclusive)")
            })
            .collect()
    }

    /// Reports every criterion that is both required and excluded.
    ///
    /// Polarity flips under each NOT and is shared by both sides of AND and
    /// OR alike, so `x OR NOT x` is reported the same way as `x AND NOT x`.
    /// Messages follow the order in which criteria first appear positively.
    pub fn check_contradictions(&self, expr: &Expr) -> Vec<String> {
        let mut positive = Vec::new();
        let mut negative = HashSet::new();
        collect_polarity(expr, false, &mut positive, &mut negative);

        positive
            .into_iter()
            .filter(|value| negative.contains(value))
            .map(|value| format!("Contradiction: '{value}' appears as both required and excluded"))
            .collect()
    }
}

type Group<'a> = BTreeSet<&'a str>;

/// Collects the distinct AND-connected groups of criteria under `expr`.
///
/// Only criteria listed in `terms` are kept, so the number of groups is
/// bounded by the subsets of `terms` rather than by the shape of `expr`.
fn and_groups<'a>(expr: &'a Expr, terms: &HashSet<&str>) -> BTreeSet<Group<'a>> {
    match expr {
        Expr::Criterion { value } => {
            let mut group = Group::new();
            if terms.contains(value.as_str()) {
                group.insert(value.as_str());
            }
            BTreeSet::from([group])
        }
        Expr::Not { operand } => and_groups(operand, terms),
        Expr::Binary { op, left, right } => {
            let left_groups = and_groups(left, terms);
            let right_groups = and_groups(right, terms);

            match op {
                BinaryOperator::And => left_groups
                    .iter()
                    .flat_map(|l| {
                        right_groups
                            .iter()
                            .map(move |r| l.union(r).copied().collect::<Group<'a>>())
                    })
                    .collect(),
                BinaryOperator::Or => {
                    let mut groups = left_groups;
                    groups.extend(right_groups);
                    groups
                }
            }
        }
    }
}

fn collect_polarity<'a>(
    expr: &'a Expr,
    negated: bool,
    positive: &mut Vec<&'a str>,
    negative: &mut HashSet<&'a str>,
) {
    match expr {
        Expr::Criterion { value } => {
            if negated {
                negative.insert(value);
            } else if !positive.contains(&value.as_str()) {
                positive.push(value);
            }
        }
        Expr::Not { operand } => collect_polarity(operand, !negated, positive, negative),
        Expr::Binary { left, right, .. } => {
            collect_polarity(left, negated, positive, negative);
            collect_polarity(right, negated, positive, negative);
        }
    }
}

//! Heuristic for deciding whether a free-text query is a Boolean expression.

/// Returns true if the query contains a standalone `AND`, `OR` or `NOT`
/// (any case) or any parenthesis.
///
/// Plain queries such as `cybersecurity vendors in Malaysia` are not
/// Boolean and are better served by ranked search than by filtering.
///
/// # Example
///
/// ```
/// use vendor_filter::looks_like_boolean;
///
/// assert!(looks_like_boolean("cybersecurity and ISO27001"));
/// assert!(looks_like_boolean("(SIEM)"));
/// assert!(!looks_like_boolean("android developers in oregon"));
/// ```
pub fn looks_like_boolean(query: &str) -> bool {
    if query.contains(['(', ')']) {
        return true;
    }

    query
        .split_whitespace()
        .any(|word| matches!(word.to_uppercase().as_str(), "AND" | "OR" | "NOT"))
}

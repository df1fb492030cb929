//! Approximate matching consulted when a criterion is not a substring of any
//! record field.

use strsim::normalized_levenshtein;

/// Default similarity score (0-100) a fallback match must reach.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 75.0;

/// A second-chance matcher for criteria.
///
/// Called with the lower-cased criterion and the record's `industry` value
/// only after exact substring matching failed on every field.
pub trait FallbackMatcher: Send + Sync {
    /// Returns true if the criterion should count as matching the industry.
    fn matches(&self, criterion: &str, industry: &str) -> bool;
}

impl<F> FallbackMatcher for F
where
    F: Fn(&str, &str) -> bool + Send + Sync,
{
    fn matches(&self, criterion: &str, industry: &str) -> bool {
        self(criterion, industry)
    }
}

/// Edit-distance matcher built on normalized Levenshtein similarity.
///
/// The industry value is scored as a whole and word by word; the best score
/// is compared against the threshold. This lets `cybersecurty` match
/// `cybersecurity` and `consulting` match `it consulting`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityMatcher {
    threshold: f64,
}

impl Default for SimilarityMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_FUZZY_THRESHOLD)
    }
}

impl SimilarityMatcher {
    /// Creates a matcher with a 0-100 threshold. Values outside the range are clamped.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 100.0),
        }
    }

    /// Returns the configured threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Scores the best similarity between the criterion and the candidate
    /// text or any of its words, on a 0-100 scale.
    pub fn score(&self, criterion: &str, candidate: &str) -> f64 {
        let criterion = criterion.trim().to_lowercase();
        let candidate = candidate.trim().to_lowercase();
        if criterion.is_empty() || candidate.is_empty() {
            return 0.0;
        }

        std::iter::once(candidate.as_str())
            .chain(candidate.split(|c: char| c.is_whitespace() || c == '|' || c == ','))
            .filter(|part| !part.is_empty())
            .map(|part| normalized_levenshtein(&criterion, part) * 100.0)
            .fold(0.0, f64::max)
    }
}

impl FallbackMatcher for SimilarityMatcher {
    fn matches(&self, criterion: &str, industry: &str) -> bool {
        self.score(criterion, industry) >= self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_scores_full() {
        let matcher = SimilarityMatcher::default();
        assert_eq!(matcher.score("banking", "Banking"), 100.0);
    }

    #[test]
    fn test_typo_matches() {
        let matcher = SimilarityMatcher::default();
        assert!(matcher.matches("cybersecurty", "cybersecurity"));
        assert!(!matcher.matches("banking", "cybersecurity"));
    }

    #[test]
    fn test_word_level_match() {
        let matcher = SimilarityMatcher::default();
        assert!(matcher.matches("consultng", "it consulting"));
    }

    #[test]
    fn test_empty_inputs_never_match() {
        let matcher = SimilarityMatcher::new(0.0);
        assert_eq!(matcher.score("", "banking"), 0.0);
        assert_eq!(matcher.score("banking", "  "), 0.0);
    }

    #[test]
    fn test_threshold_clamped() {
        assert_eq!(SimilarityMatcher::new(150.0).threshold(), 100.0);
        assert_eq!(SimilarityMatcher::new(-3.0).threshold(), 0.0);
    }

    #[test]
    fn test_closure_matcher() {
        let matcher = |criterion: &str, industry: &str| criterion == "infosec" && industry == "cybersecurity";
        assert!(matcher.matches("infosec", "cybersecurity"));
        assert!(!FallbackMatcher::matches(&matcher, "infosec", "banking"));
    }
}

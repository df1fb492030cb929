//! Mutual-exclusion table used by conflict detection.
//!
//! The table is plain data: callers build it in code, take the default, or
//! deserialize it from text they loaded themselves. This crate never reads
//! taxonomy files from disk.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Built-in pairs of criteria that rarely make sense together.
const DEFAULT_EXCLUSIONS: &[(&str, &str)] = &[
    ("cybersecurity", "banking"),
    ("cybersecurity", "retail"),
    ("banking", "manufacturing"),
    ("iso27001", "iso9001"),
];

/// Errors that can occur when decoding an exclusion table.
#[derive(Debug, Error)]
pub enum TaxonomyError {
    /// The TOML document could not be decoded.
    #[error("invalid taxonomy TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// The JSON document could not be decoded.
    #[error("invalid taxonomy JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// An ordered list of mutually exclusive criterion pairs.
///
/// Pairs are stored lower-cased; lookups are case-insensitive.
///
/// Serialized form:
///
/// ```toml
/// exclusions = [["cybersecurity", "banking"], ["iso27001", "iso9001"]]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionTable {
    #[serde(default, deserialize_with = "deserialize_pairs")]
    exclusions: Vec<(String, String)>,
}

fn deserialize_pairs<'de, D>(deserializer: D) -> Result<Vec<(String, String)>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let pairs: Vec<(String, String)> = Vec::deserialize(deserializer)?;
    Ok(pairs
        .into_iter()
        .map(|(a, b)| (normalize(&a), normalize(&b)))
        .collect())
}

fn normalize(term: &str) -> String {
    term.trim().to_lowercase()
}

impl Default for ExclusionTable {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_EXCLUSIONS.iter().copied())
    }
}

impl ExclusionTable {
    /// Creates a table with no exclusions.
    pub fn empty() -> Self {
        Self {
            exclusions: Vec::new(),
        }
    }

    /// Creates a table from criterion pairs, preserving their order.
    ///
    /// # Example
    ///
    /// ```
    /// use vendor_filter::ExclusionTable;
    ///
    /// let table = ExclusionTable::from_pairs([("Solar", "Coal")]);
    /// assert!(table.excludes("coal", "SOLAR"));
    /// ```
    pub fn from_pairs<I, A, B>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        Self {
            exclusions: pairs
                .into_iter()
                .map(|(a, b)| (normalize(a.as_ref()), normalize(b.as_ref())))
                .collect(),
        }
    }

    /// Decodes a table from a TOML document with an `exclusions` array.
    pub fn from_toml_str(input: &str) -> Result<Self, TaxonomyError> {
        Ok(toml::from_str(input)?)
    }

    /// Decodes a table from a JSON object with an `exclusions` array.
    pub fn from_json_str(input: &str) -> Result<Self, TaxonomyError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Returns the pairs in table order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.exclusions.iter().map(|(a, b)| (a.as_str(), b.as_str()))
    }

    /// Returns the number of pairs.
    pub fn len(&self) -> usize {
        self.exclusions.len()
    }

    /// Returns true if the table has no pairs.
    pub fn is_empty(&self) -> bool {
        self.exclusions.is_empty()
    }

    /// Returns true if the two criteria form an excluded pair, in either order.
    pub fn excludes(&self, a: &str, b: &str) -> bool {
        let (a, b) = (normalize(a), normalize(b));
        self.exclusions
            .iter()
            .any(|(x, y)| (*x == a && *y == b) || (*x == b && *y == a))
    }
}

//! Vendor records as seen by the evaluator.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The record fields a criterion is matched against, in match order.
pub const MATCH_FIELDS: [&str; 6] = [
    "industry",
    "certifications",
    "keywords",
    "country",
    "state",
    "city",
];

/// Read access to a record's text fields.
///
/// Missing fields read as the empty string.
pub trait RecordFields {
    /// Returns the text of the named field.
    fn field(&self, name: &str) -> Cow<'_, str>;
}

impl RecordFields for HashMap<String, String> {
    fn field(&self, name: &str) -> Cow<'_, str> {
        self.get(name).map_or(Cow::Borrowed(""), |v| Cow::Borrowed(v.as_str()))
    }
}

impl RecordFields for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Cow<'_, str> {
        self.get(name).map_or(Cow::Borrowed(""), |v| Cow::Borrowed(v.as_str()))
    }
}

impl<R: RecordFields + ?Sized> RecordFields for &R {
    fn field(&self, name: &str) -> Cow<'_, str> {
        (**self).field(name)
    }
}

/// A vendor record backed by an arbitrary JSON object.
///
/// Strings are used as-is, arrays are joined with a space, other scalars are
/// rendered as text and `null` reads as empty. Fields the engine does not
/// know about (spend figures, ids, names) are kept for display.
///
/// # Example
///
/// ```
/// use vendor_filter::{RecordFields, VendorRecord};
///
/// let record: VendorRecord = serde_json::from_str(
///     r#"{"industry": "cybersecurity", "certifications": ["ISO27001", "SOC2"]}"#,
/// ).unwrap();
/// assert_eq!(record.field("certifications"), "ISO27001 SOC2");
/// assert_eq!(record.field("city"), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorRecord {
    fields: BTreeMap<String, Value>,
}

impl VendorRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a text field, returning the record for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), Value::String(value.into()));
        self
    }

    /// Sets a field to any JSON value.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }

    /// Returns the raw JSON value of a field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Iterates over all fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VendorRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), Value::String(v.into())))
                .collect(),
        }
    }
}

impl RecordFields for VendorRecord {
    fn field(&self, name: &str) -> Cow<'_, str> {
        match self.fields.get(name) {
            None | Some(Value::Null) => Cow::Borrowed(""),
            Some(value) => value_text(value),
        }
    }
}

fn value_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::String(s) => Cow::Borrowed(s),
        Value::Array(items) => Cow::Owned(
            items
                .iter()
                .map(value_text)
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        ),
        other => Cow::Owned(other.to_string()),
    }
}

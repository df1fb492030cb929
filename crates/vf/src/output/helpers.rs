//! Common helper functions for output formatting.

use owo_colors::OwoColorize;
use vendor_filter::{RecordFields, VendorRecord};

/// Fields tried, in order, when labelling a record.
const LABEL_FIELDS: [&str; 4] = ["vendor_name", "name", "vendor_id", "id"];

/// Truncates a string to a maximum number of characters.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Returns a display name for a record, or "-" if it has none.
pub fn record_label(record: &VendorRecord) -> String {
    LABEL_FIELDS
        .iter()
        .map(|name| record.field(name))
        .find(|value| !value.trim().is_empty())
        .map_or_else(|| "-".to_string(), |value| value.into_owned())
}

/// Returns a field's text, or "-" if it is empty.
pub fn field_or_dash(record: &VendorRecord, name: &str) -> String {
    let value = record.field(name);
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.into_owned()
    }
}

/// Formats a table header row.
pub fn format_header(header: &str, use_colors: bool) -> String {
    if use_colors {
        format!("{}\n", header.dimmed())
    } else {
        format!("{header}\n")
    }
}

/// Formats a warning line.
pub fn format_warning(message: &str, use_colors: bool) -> String {
    if use_colors {
        format!("{} {}", "Warning:".yellow().bold(), message)
    } else {
        format!("Warning: {message}")
    }
}

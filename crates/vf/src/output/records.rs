//! Filter result output formatting.

use serde::Serialize;
use vendor_filter::{FilterOutcome, VendorRecord};

use super::helpers::{field_or_dash, format_header, format_warning, record_label, truncate_str};

/// JSON output structure for the filter command.
#[derive(Serialize)]
pub struct FilterOutput<'a> {
    pub expression: &'a str,
    pub total: usize,
    pub matched: usize,
    pub filtered: bool,
    pub matching_indices: &'a [usize],
    pub warnings: &'a [String],
    pub records: Vec<MatchOutput<'a>>,
}

/// JSON output structure for a single matching record.
#[derive(Serialize)]
pub struct MatchOutput<'a> {
    pub index: usize,
    pub record: &'a VendorRecord,
}

/// Formats filter results as JSON.
pub fn format_filter_json(
    expression: &str,
    outcome: &FilterOutcome,
    records: &[VendorRecord],
) -> Result<String, serde_json::Error> {
    let output = FilterOutput {
        expression,
        total: records.len(),
        matched: outcome.matching_indices.len(),
        filtered: outcome.evaluated,
        matching_indices: &outcome.matching_indices,
        warnings: &outcome.errors,
        records: outcome
            .matching_indices
            .iter()
            .filter_map(|&index| records.get(index).map(|record| MatchOutput { index, record }))
            .collect(),
    };

    serde_json::to_string_pretty(&output)
}

/// Formats filter results as a table.
///
/// Warnings are left to the caller so they can go to stderr.
pub fn format_filter_table(
    outcome: &FilterOutcome,
    records: &[VendorRecord],
    use_colors: bool,
) -> String {
    if outcome.matching_indices.is_empty() {
        return format!("No matching records (0 of {}).\n", records.len());
    }

    let mut output = String::new();

    let header = format!("{:<5} {:<30} {:<20} {}", "Idx", "Name", "Industry", "Country");
    output.push_str(&format_header(&header, use_colors));

    for &index in &outcome.matching_indices {
        let Some(record) = records.get(index) else {
            continue;
        };
        let line = format!(
            "{:<5} {:<30} {:<20} {}",
            index,
            truncate_str(&record_label(record), 30),
            truncate_str(&field_or_dash(record, "industry"), 20),
            field_or_dash(record, "country"),
        );
        output.push_str(&line);
        output.push('\n');
    }

    output.push_str(&format!(
        "\n{} of {} records matched.\n",
        outcome.matching_indices.len(),
        records.len()
    ));

    output
}

/// Formats warnings, one per line.
pub fn format_filter_warnings(outcome: &FilterOutcome, use_colors: bool) -> String {
    outcome
        .errors
        .iter()
        .map(|warning| format!("{}\n", format_warning(warning, use_colors)))
        .collect()
}

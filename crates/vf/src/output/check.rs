//! Expression check output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;
use vendor_filter::filter::Expr;

use super::helpers::format_warning;

/// JSON output structure for the check command.
#[derive(Serialize)]
pub struct CheckOutput<'a> {
    pub expression: &'a str,
    pub canonical: String,
    pub criteria: Vec<&'a str>,
    pub ast: &'a Expr,
    pub warnings: &'a [String],
}

/// Formats a parsed expression as JSON.
pub fn format_check_json<'a>(
    expression: &'a str,
    ast: &'a Expr,
    warnings: &'a [String],
) -> Result<String, serde_json::Error> {
    let output = CheckOutput {
        expression,
        canonical: ast.to_string(),
        criteria: ast.criteria(),
        ast,
        warnings,
    };
    serde_json::to_string_pretty(&output)
}

/// Formats a parsed expression for the terminal.
pub fn format_check_table(ast: &Expr, warnings: &[String], use_colors: bool) -> String {
    let mut output = String::new();

    let status = if warnings.is_empty() { "OK" } else { "OK (with warnings)" };
    if use_colors {
        output.push_str(&format!("{}\n", status.green().bold()));
    } else {
        output.push_str(&format!("{status}\n"));
    }

    output.push_str(&format!("Parsed:   {ast}\n"));
    output.push_str(&format!("Criteria: {}\n", ast.criteria().join(", ")));

    for warning in warnings {
        output.push_str(&format_warning(warning, use_colors));
        output.push('\n');
    }

    output
}

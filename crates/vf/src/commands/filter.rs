//! Filter command implementation.
//!
//! Loads a JSON array of vendor records and keeps those matching an expression.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;
use vendor_filter::{looks_like_boolean, FilterEngine, FilterOutcome, VendorRecord};

use crate::output::{format_filter_json, format_filter_table, format_filter_warnings};

use super::config::load_context_config;
use super::{CommandContext, CommandError, Result};

/// Options for the filter command.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterOptions {
    /// Fail on conflict or contradiction warnings.
    pub strict: bool,
    /// Pass records through when the query is not Boolean.
    pub auto: bool,
    /// Force the fallback matcher on.
    pub fuzzy: bool,
}

/// Executes the filter command.
pub fn execute(
    ctx: &CommandContext,
    expression: &str,
    records_path: &Path,
    opts: FilterOptions,
) -> Result<()> {
    let config = load_context_config(ctx)?;
    let records = load_records(records_path)?;
    let engine = config.build_engine(opts.fuzzy);

    let outcome = run_filter(&engine, expression, &records, opts)?;

    if ctx.json_output {
        println!("{}", format_filter_json(expression, &outcome, &records)?);
    } else {
        if !ctx.quiet {
            eprint!("{}", format_filter_warnings(&outcome, ctx.use_colors));
        }
        print!("{}", format_filter_table(&outcome, &records, ctx.use_colors));
    }

    Ok(())
}

/// Runs an expression over records, applying the command's options.
///
/// # Errors
///
/// Returns [`CommandError::Expression`] for a malformed expression, and
/// [`CommandError::Rejected`] for warnings in strict mode.
pub fn run_filter(
    engine: &FilterEngine,
    expression: &str,
    records: &[VendorRecord],
    opts: FilterOptions,
) -> Result<FilterOutcome> {
    if opts.auto && !looks_like_boolean(expression) {
        debug!(expression, "not a Boolean query, passing records through");
        return Ok(FilterOutcome {
            matching_indices: (0..records.len()).collect(),
            errors: Vec::new(),
            evaluated: false,
        });
    }

    let outcome = engine.filter_records(expression, records);

    if !outcome.evaluated {
        return Err(CommandError::Expression(outcome.errors.join("; ")));
    }
    if opts.strict && !outcome.errors.is_empty() {
        return Err(CommandError::Rejected(outcome.errors));
    }

    Ok(outcome)
}

/// Reads records from a JSON file, or from stdin when the path is `-`.
pub fn load_records(path: &Path) -> Result<Vec<VendorRecord>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };

    let records: Vec<VendorRecord> = serde_json::from_str(&content)?;
    debug!(count = records.len(), "loaded records");
    Ok(records)
}

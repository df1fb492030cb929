//! Check command implementation.
//!
//! Validates an expression and shows its parsed form, criteria and warnings.

use crate::output::{format_check_json, format_check_table};

use super::config::load_context_config;
use super::{CommandContext, CommandError, Result};

/// Executes the check command.
///
/// # Errors
///
/// Returns [`CommandError::Expression`] if the expression is malformed.
/// Conflicts and contradictions are reported but do not fail the command.
pub fn execute(ctx: &CommandContext, expression: &str) -> Result<()> {
    let engine = load_context_config(ctx)?.build_engine(false);
    let outcome = engine.parse_and_validate(expression);

    let Some(ast) = outcome.ast.as_ref() else {
        return Err(CommandError::Expression(outcome.errors.join("; ")));
    };

    if ctx.json_output {
        println!("{}", format_check_json(expression, ast, &outcome.errors)?);
    } else if !ctx.quiet {
        print!("{}", format_check_table(ast, &outcome.errors, ctx.use_colors));
    }

    Ok(())
}

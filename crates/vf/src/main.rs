use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands, ConfigCommands};
use commands::filter::FilterOptions;
use commands::{CommandContext, CommandError};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                eprintln!("{error_json:#}");
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins; otherwise `--verbose` selects debug and the default is warn.
fn init_tracing(cli: &Cli) {
    let default_level = if cli.verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(!cli.no_color)
        .init();
}

fn run(cli: &Cli) -> commands::Result<()> {
    let ctx = CommandContext::from_cli(cli);

    match &cli.command {
        Commands::Check { expression } => commands::check::execute(&ctx, expression),
        Commands::Filter {
            expression,
            records,
            strict,
            auto,
            fuzzy,
        } => {
            let opts = FilterOptions {
                strict: *strict,
                auto: *auto,
                fuzzy: *fuzzy,
            };
            commands::filter::execute(&ctx, expression, records, opts)
        }
        Commands::Config { command } => match command {
            Some(ConfigCommands::Show) | None => commands::config::execute_show(&ctx),
            Some(ConfigCommands::Path) => commands::config::execute_path(&ctx),
            Some(ConfigCommands::Init) => commands::config::execute_init(&ctx),
        },
        Commands::Completions { shell } => Ok(commands::completions::execute(shell)?),
    }
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Expression(_) => "EXPRESSION_ERROR",
        CommandError::Rejected(_) => "FILTER_REJECTED",
        CommandError::Config(_) | CommandError::Toml(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    ExitCode::from(exit_status(e))
}

fn exit_status(e: &CommandError) -> u8 {
    match e {
        CommandError::Expression(_) | CommandError::Rejected(_) | CommandError::Json(_) => 1,
        CommandError::Io(_) => 3,
        CommandError::Config(_) | CommandError::Toml(_) => 5,
    }
}

//! Command implementations for the vf CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod check;
pub mod completions;
pub mod config;
pub mod filter;

use std::env;
use std::path::PathBuf;

use crate::cli::Cli;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The expression failed validation or parsing.
    #[error("invalid expression: {0}")]
    Expression(String),

    /// The expression parsed but was rejected in strict mode.
    #[error("filter rejected: {}", .0.join("; "))]
    Rejected(Vec<String>),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Config file could not be parsed.
    #[error("configuration error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Explicit config file path, from `--config` or `VF_CONFIG`.
    pub config_path: Option<PathBuf>,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color && env::var_os("NO_COLOR").is_none(),
            quiet: cli.quiet,
            config_path: cli.config.clone(),
        }
    }
}

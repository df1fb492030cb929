//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the vf CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// vf - Boolean filter expressions over vendor records
#[derive(Parser, Debug)]
#[command(name = "vf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output (also honours NO_COLOR)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Config file to use (default: ~/.config/vf/config.toml)
    #[arg(long, global = true, env = "VF_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate an expression and show how it parses
    #[command(alias = "c")]
    Check {
        /// Filter expression, e.g. "(cybersecurity OR compliance) AND NOT banking"
        expression: String,
    },

    /// Filter a JSON file of vendor records
    #[command(alias = "f")]
    Filter {
        /// Filter expression
        expression: String,

        /// JSON file holding an array of vendor records
        #[arg(short, long)]
        records: PathBuf,

        /// Fail on conflicting or contradictory criteria
        #[arg(long)]
        strict: bool,

        /// Pass every record through when the query has no Boolean operators
        #[arg(long)]
        auto: bool,

        /// Fall back to approximate industry matching
        #[arg(long)]
        fuzzy: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Print the config file path
    Path,

    /// Write a default config file if none exists
    Init,
}

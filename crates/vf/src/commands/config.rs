//! Config command implementation.
//!
//! View and manage configuration settings.
//! Config file is located at ~/.config/vf/config.toml.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;
use vendor_filter::{ExclusionTable, FilterEngine, SimilarityMatcher, DEFAULT_FUZZY_THRESHOLD};

use super::{CommandContext, CommandError, Result};

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Default config file contents.
const DEFAULT_CONFIG: &str = r#"# vf - vendor filter configuration

# Config schema version (do not modify)
version = 1

# Matching behaviour
[matching]
# fuzzy = false           # Approximate industry matching when a criterion misses
# fuzzy_threshold = 75.0  # Similarity score (0-100) needed for a fuzzy match

# Mutually exclusive criteria, reported when joined by AND.
# When set, this list replaces the built-in one.
[taxonomy]
# exclusions = [
#     ["cybersecurity", "banking"],
#     ["cybersecurity", "retail"],
#     ["banking", "manufacturing"],
#     ["iso27001", "iso9001"],
# ]
"#;

/// Configuration file structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to current version when not present in file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Matching settings.
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Taxonomy settings.
    #[serde(default)]
    pub taxonomy: TaxonomyConfig,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            matching: MatchingConfig::default(),
            taxonomy: TaxonomyConfig::default(),
        }
    }
}

/// Matching configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Enable the similarity fallback matcher.
    #[serde(default)]
    pub fuzzy: bool,

    /// Minimum similarity score for a fallback match.
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,
}

fn default_fuzzy_threshold() -> f64 {
    DEFAULT_FUZZY_THRESHOLD
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            fuzzy: false,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }
}

/// Taxonomy configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyConfig {
    /// Replacement exclusion pairs; the built-in table is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusions: Option<Vec<(String, String)>>,
}

impl Config {
    /// Returns the exclusion table this config selects.
    pub fn exclusion_table(&self) -> ExclusionTable {
        match &self.taxonomy.exclusions {
            Some(pairs) => ExclusionTable::from_pairs(pairs.iter().map(|(a, b)| (a, b))),
            None => ExclusionTable::default(),
        }
    }

    /// Builds a filter engine from this config.
    ///
    /// `force_fuzzy` turns the fallback matcher on regardless of the file.
    pub fn build_engine(&self, force_fuzzy: bool) -> FilterEngine {
        let engine = FilterEngine::new().with_exclusions(self.exclusion_table());

        if self.matching.fuzzy || force_fuzzy {
            debug!(threshold = self.matching.fuzzy_threshold, "fuzzy matching enabled");
            engine.with_fallback(SimilarityMatcher::new(self.matching.fuzzy_threshold))
        } else {
            engine
        }
    }
}

/// Gets the config directory path.
/// Uses XDG-style paths: ~/.config/vf/ on all platforms.
fn get_config_dir() -> Result<PathBuf> {
    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        if !xdg_config.is_empty() {
            return Ok(PathBuf::from(xdg_config).join("vf"));
        }
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("vf"))
        .ok_or_else(|| CommandError::Config("Could not determine config directory".to_string()))
}

/// Gets the config file path.
///
/// An explicit path (from `--config` or `VF_CONFIG`) wins over the default location.
pub fn get_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    Ok(get_config_dir()?.join("config.toml"))
}

/// Loads the configuration, falling back to defaults when the file is missing.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {e}")))?;

    let config: Config = toml::from_str(&content)?;
    validate_config(&config)?;

    migrate_config(config)
}

/// Loads the configuration selected by the command context.
pub fn load_context_config(ctx: &CommandContext) -> Result<Config> {
    let path = get_config_path(ctx.config_path.as_deref())?;
    load_config(&path)
}

fn validate_config(config: &Config) -> Result<()> {
    let threshold = config.matching.fuzzy_threshold;
    if !(0.0..=100.0).contains(&threshold) {
        return Err(CommandError::Config(format!(
            "fuzzy_threshold must be between 0 and 100, got {threshold}"
        )));
    }
    Ok(())
}

/// Migrates config to current version if needed.
fn migrate_config(mut config: Config) -> Result<Config> {
    // Version 1 is the only schema so far.
    config.version = CONFIG_VERSION;
    Ok(config)
}

/// Executes the config show command.
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path(ctx.config_path.as_deref())?;
    let config = load_config(&path)?;
    let exclusions = config.exclusion_table();

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "config": config,
            "exclusions": exclusions.pairs().collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        use owo_colors::OwoColorize;

        let header = "Configuration";
        if ctx.use_colors {
            println!("{}\n", header.green().bold());
        } else {
            println!("{header}\n");
        }

        println!("File: {}", path.display());
        println!("Exists: {}\n", path.exists());

        println!("[matching]");
        println!("  fuzzy: {}", config.matching.fuzzy);
        println!("  fuzzy_threshold: {}", config.matching.fuzzy_threshold);

        let source = if config.taxonomy.exclusions.is_some() {
            "config"
        } else {
            "built-in"
        };
        println!("\n[taxonomy] ({source})");
        if exclusions.is_empty() {
            println!("  (no exclusions)");
        }
        for (a, b) in exclusions.pairs() {
            println!("  {a} <-> {b}");
        }
    }

    Ok(())
}

/// Executes the config path command.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path(ctx.config_path.as_deref())?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", path.display());
    }

    Ok(())
}

/// Executes the config init command.
///
/// Leaves an existing file untouched.
pub fn execute_init(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path(ctx.config_path.as_deref())?;
    let created = init_config(&path)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "created": created,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        if created {
            println!("Created {}", path.display());
        } else {
            println!("Config already exists at {}", path.display());
        }
    }

    Ok(())
}

/// Writes the default config file. Returns false if one already exists.
fn init_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CommandError::Config(format!("Failed to create config directory: {e}"))
        })?;
    }

    fs::write(path, DEFAULT_CONFIG)
        .map_err(|e| CommandError::Config(format!("Failed to write config: {e}")))?;

    Ok(true)
}

//! Configuration management for the padding lint.
//!
//! Handles:
//! - Command-line argument parsing
//! - Project config file loading (padcheck.toml)
//! - Padding policy resolution (CLI flag > config file > default)

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default project config file name, looked up in the current directory
/// when --config is not given
const PROJECT_CONFIG_FILE: &str = "padcheck.toml";

/// Command-line arguments for the padding lint
#[derive(Debug, Parser)]
#[command(name = "padcheck")]
#[command(about = "Blank-line padding lint for brace-delimited blocks")]
#[command(version)]
pub struct Args {
    /// Source files to lint
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Padding policy, overriding the config file
    #[arg(long, help = "Padding policy ('always' or 'never')")]
    pub padding: Option<String>,

    /// Explicit config file to use instead of ./padcheck.toml
    #[arg(long, help = "Path to a padcheck TOML config file")]
    pub config: Option<PathBuf>,

    /// Output format for diagnostics
    #[arg(long, default_value = "text", help = "Output format (text, json)")]
    pub format: String,

    /// Log level for the linter
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// The padding policy: whether block interiors must or must not be
/// padded by blank lines. Fixed for the lifetime of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    #[default]
    Always,
    Never,
}

impl FromStr for Policy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "always" => Ok(Policy::Always),
            "never" => Ok(Policy::Never),
            other => bail!("unrecognized padding policy '{other}' (expected 'always' or 'never')"),
        }
    }
}

/// Output format for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => bail!("unrecognized output format '{other}' (expected 'text' or 'json')"),
        }
    }
}

/// Project config file structure (matches TOML)
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FileConfig {
    pub padding: Option<Policy>,
}

impl FileConfig {
    /// Load and parse a TOML config file; unrecognized policy values
    /// are rejected here, before any engine is constructed
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Files to lint
    pub files: Vec<PathBuf>,
    /// Resolved padding policy
    pub policy: Policy,
    /// Diagnostic output format
    pub format: OutputFormat,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let file_config = match &args.config {
            Some(path) => Some(FileConfig::load(path)?),
            None => {
                let default_path = Path::new(PROJECT_CONFIG_FILE);
                if default_path.exists() {
                    Some(FileConfig::load(default_path)?)
                } else {
                    None
                }
            }
        };

        // CLI flag wins over the config file; absence selects Always
        let policy = match &args.padding {
            Some(value) => value.parse()?,
            None => file_config.and_then(|c| c.padding).unwrap_or_default(),
        };

        Ok(Config {
            files: args.files,
            policy,
            format: args.format.parse()?,
            log_level: args.log_level,
        })
    }
}

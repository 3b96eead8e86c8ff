//! CLI interface for career compass

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "career-compass")]
#[command(about = "Tiered job recommendations with skill-gap analysis and preparation roadmaps")]
#[command(long_about = "Match a candidate profile against a job pool and produce conservative, \
optimal, and stretch recommendations with application strategies and preparation roadmaps")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate tiered recommendations for a candidate
    Recommend {
        /// Path to the search criteria file (TOML or JSON)
        #[arg(short = 'r', long)]
        criteria: PathBuf,

        /// Path to the job pool file (JSON array of job records)
        #[arg(short, long)]
        jobs: PathBuf,

        /// Optional candidate skill profile (JSON map of skill -> level)
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Maximum recommendations per tier
        #[arg(short, long)]
        max_per_tier: Option<usize>,

        /// Output detailed strategy and roadmap information
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Skip the request cache for this run
        #[arg(long)]
        no_cache: bool,
    },

    /// Show the static tier catalog
    Tiers,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

//! Command-line argument definitions
//!
//! Every option can also come from the environment, which is how CI
//! workflows usually drive the tool.

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser};
use devto_publish::{PublisherConfig, DEFAULT_API_URL, DEFAULT_CANONICAL_BASE};
use log::LevelFilter;
use std::path::PathBuf;

/// Main CLI application
#[derive(Parser, Debug)]
#[command(
    name = "devto-publish",
    version,
    about = "Publish markdown articles with YAML front matter to dev.to",
    long_about = "devto-publish creates or updates one dev.to article per markdown file. \
                  The remote id and URL are written back into the file's front matter so \
                  that later runs update the same article instead of creating a new one."
)]
pub struct Cli {
    /// Markdown files, or directories containing them, to publish in order
    #[arg(value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Report what would be published without calling the API or touching files
    #[arg(long, env = "DRY_RUN", action = ArgAction::SetTrue, value_parser = FalseyValueParser::new())]
    pub dry_run: bool,

    /// dev.to API key (required unless --dry-run)
    #[arg(long, env = "DEV_TO_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the Forem API
    #[arg(long, env = "DEV_TO_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Prefix for canonical URLs of articles without an explicit `canonical_url`
    #[arg(long, env = "CANONICAL_BASE_URL", default_value = DEFAULT_CANONICAL_BASE)]
    pub canonical_base: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Log level implied by --verbose / --quiet
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Error
        } else {
            LevelFilter::Warn
        }
    }

    pub fn publisher_config(&self) -> PublisherConfig {
        PublisherConfig {
            api_key: self.api_key.clone(),
            dry_run: self.dry_run,
            canonical_base: self.canonical_base.clone(),
        }
    }
}

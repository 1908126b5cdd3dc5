//! Command line argument parsing for the Javelin CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::query::MatchStrategy;

/// Javelin - boolean line search over a plain-text file
#[derive(Parser, Debug, Clone)]
#[command(name = "javelin")]
#[command(about = "Boolean line search over a plain-text file")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct JavelinArgs {
    /// Path to the data file (one record per line)
    #[arg(long = "data", value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute (interactive shell when omitted)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl JavelinArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the interactive search shell
    Shell,

    /// Run a single query and exit
    Search(SearchArgs),

    /// Print all loaded lines
    List,

    /// Show index statistics
    Stats,
}

/// Arguments for a one-shot search
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Matching strategy
    #[arg(short, long, default_value = "any")]
    pub strategy: MatchStrategy,

    /// Space-separated search terms
    #[arg(value_name = "TERMS")]
    pub terms: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

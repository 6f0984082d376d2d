//! Command line argument parsing for the Tino CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Tino - example-based fuzzy intent classification
#[derive(Parser, Debug, Clone)]
#[command(name = "tino")]
#[command(about = "Classify short utterances against a catalog of intent examples")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TinoArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
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

    /// Catalog file (JSON object of intent name -> example phrases);
    /// the built-in demo catalog is used when omitted
    #[arg(short, long, env = "TINO_CATALOG", value_name = "CATALOG_FILE", global = true)]
    pub catalog: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TinoArgs {
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
    /// Classify a single text
    Classify(ClassifyArgs),

    /// Classify multiple texts from a file, one per line
    Batch(BatchArgs),

    /// List the intents in the active catalog
    Intents(IntentsArgs),
}

/// Arguments for classifying one text
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// The text to classify
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Minimum best score for a non-unknown result
    #[arg(short, long, value_name = "THRESHOLD")]
    pub threshold: Option<f64>,

    /// Minimum gap between the best and second-best scores
    #[arg(short, long, value_name = "MIN_MARGIN")]
    pub min_margin: Option<f64>,
}

/// Arguments for batch classification
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// File with one utterance per line
    #[arg(value_name = "TEXTS_FILE")]
    pub texts_file: PathBuf,

    /// Minimum best score for a non-unknown result
    #[arg(short, long, value_name = "THRESHOLD")]
    pub threshold: Option<f64>,

    /// Minimum gap between the best and second-best scores
    #[arg(short, long, value_name = "MIN_MARGIN")]
    pub min_margin: Option<f64>,
}

/// Arguments for listing intents
#[derive(Parser, Debug, Clone)]
pub struct IntentsArgs {
    /// Also show the example phrases of every intent
    #[arg(short, long)]
    pub examples: bool,
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

//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use crate::models::Model;
use clap::Parser;
use std::path::PathBuf;

/// TriadEval - accuracy evaluation for the Triad Rome cultural benchmark
///
/// Computes per-category and overall accuracy for the Claude baseline and
/// the Triad system from a JSONL results dataset, and prints a comparison
/// of the two.
///
/// Examples:
///   triadeval --dataset samples/sample_20q.jsonl
///   triadeval --dataset results/full_run.jsonl --model triad
///   triadeval --dataset results/full_run.jsonl --model both --verbose
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Path to the evaluation dataset (JSONL)
    ///
    /// One JSON object per line. Each record needs a "category" field plus
    /// an "is_<model>_correct" boolean for every model being evaluated.
    #[arg(long, value_name = "PATH")]
    pub dataset: PathBuf,

    /// Which model's results to evaluate (claude, triad, both)
    #[arg(long, default_value = "both", value_name = "MODEL")]
    pub model: ModelChoice,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (report only, no status lines)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Model selection for --model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ModelChoice {
    /// Claude baseline only
    Claude,
    /// Triad system only
    Triad,
    /// Both models plus the comparison (default)
    #[default]
    Both,
}

impl ModelChoice {
    /// Expand the selection into the concrete models to evaluate.
    pub fn models(self) -> Vec<Model> {
        match self {
            ModelChoice::Claude => vec![Model::Claude],
            ModelChoice::Triad => vec![Model::Triad],
            ModelChoice::Both => Model::ALL.to_vec(),
        }
    }
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

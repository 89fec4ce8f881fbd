//! TriadEval - Triad Rome Cultural Benchmark Evaluation Framework
//!
//! A CLI tool that loads benchmark results from a JSONL dataset and
//! reports per-category and overall accuracy for the Claude baseline
//! and the Triad system, including a head-to-head comparison.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (dataset missing, unparseable, or incomplete)

mod analysis;
mod cli;
mod dataset;
mod error;
mod models;
mod report;

use anyhow::Result;
use cli::Args;
use error::EvalError;
use models::{EvaluationResult, Model};
use tracing::debug;
use tracing_subscriber::FmtSubscriber;

fn main() {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Initialize logging
    init_logging(&args);

    debug!("Arguments: {:?}", args);

    // Run the evaluation
    if let Err(e) = run_evaluation(&args) {
        eprintln!("Error: {}", e);
        if matches!(e.downcast_ref::<EvalError>(), Some(EvalError::NotFound { .. })) {
            print_usage_hint();
        }
        std::process::exit(1);
    }
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the complete evaluation workflow.
fn run_evaluation(args: &Args) -> Result<()> {
    // Checked up front so nothing is printed for a bad path
    if !args.dataset.exists() {
        return Err(EvalError::NotFound {
            path: args.dataset.clone(),
        }
        .into());
    }

    if !args.quiet {
        println!("=== Triad Rome Cultural Benchmark Evaluation Framework ===");
        println!("Loading dataset from: {}", args.dataset.display());
    }

    let records = dataset::load_dataset(&args.dataset)?;
    debug!("Loaded {} records from {}", records.len(), args.dataset.display());

    if !args.quiet {
        println!("Loaded {} questions", records.len());
    }

    let mut results: Vec<EvaluationResult> = Vec::new();
    for model in args.model.models() {
        let result = analysis::compute_metrics(&records, model)?;
        debug!(
            "{}: {}/{} correct across {} categories",
            model,
            result.total_correct,
            result.total_questions,
            result.categories.len()
        );
        print!("{}", report::render_model_report(&result));
        results.push(result);
    }

    let claude = results.iter().find(|r| r.model == Model::Claude);
    let triad = results.iter().find(|r| r.model == Model::Triad);
    if let (Some(claude), Some(triad)) = (claude, triad) {
        print!("{}", report::render_comparison(claude, triad));
    }

    Ok(())
}

/// Print usage examples after a missing-dataset error.
fn print_usage_hint() {
    eprintln!("\nUsage examples:");
    eprintln!("  triadeval --dataset samples/sample_20q.jsonl");
    eprintln!("  triadeval --dataset /path/to/full/dataset.jsonl");
}

//! Accuracy aggregation.
//!
//! This module computes per-category and overall correctness tallies for
//! one model in a single pass over the record sequence.

use crate::error::EvalError;
use crate::models::{CategoryTally, EvaluationResult, Model, Record};
use std::collections::HashMap;

/// Compute accuracy metrics for `model` across `records`.
///
/// Every counter lives and dies inside this call, so repeated invocations
/// (one per model) cannot leak state into each other. Fails on the first
/// record lacking `category` or the model's correctness field; records are
/// never partially counted.
pub fn compute_metrics(records: &[Record], model: Model) -> Result<EvaluationResult, EvalError> {
    let mut categories: HashMap<String, CategoryTally> = HashMap::new();
    let mut total_correct = 0;

    for record in records {
        let category = record.category().ok_or_else(|| EvalError::MissingField {
            line: record.line(),
            field: "category".to_string(),
        })?;
        let correct = record.is_correct(model).ok_or_else(|| EvalError::MissingField {
            line: record.line(),
            field: model.correctness_field().to_string(),
        })?;

        let tally = categories.entry(category.to_string()).or_default();
        tally.total += 1;
        if correct {
            tally.correct += 1;
            total_correct += 1;
        }
    }

    Ok(EvaluationResult {
        model,
        categories,
        total_correct,
        total_questions: records.len(),
    })
}

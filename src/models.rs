//! Data models for the benchmark evaluator.
//!
//! This module contains the core data structures shared by the loader,
//! aggregator, and reporter.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

/// One of the two evaluated subjects.
///
/// Each model owns one boolean correctness field per dataset record. The
/// mapping lives here as an enumerated method rather than string
/// interpolation, so an unsupported model name cannot reach the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    Claude,
    Triad,
}

impl Model {
    /// Evaluation order when both models are requested: claude first.
    pub const ALL: [Model; 2] = [Model::Claude, Model::Triad];

    /// Name of the record field holding this model's correctness verdict.
    pub fn correctness_field(self) -> &'static str {
        match self {
            Model::Claude => "is_claude_correct",
            Model::Triad => "is_triad_correct",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Model::Claude => write!(f, "Claude"),
            Model::Triad => write!(f, "Triad"),
        }
    }
}

/// One evaluation item parsed from a dataset line.
///
/// Keeps the full JSON object: the aggregator reads `category` and the
/// per-model correctness flags, and anything else (question text, answers,
/// ids) rides along untouched. Immutable after load.
#[derive(Debug, Clone)]
pub struct Record {
    line: usize,
    fields: Map<String, Value>,
}

impl Record {
    /// Creates a record from the object parsed at the given dataset line.
    pub fn new(line: usize, fields: Map<String, Value>) -> Self {
        Self { line, fields }
    }

    /// 1-based dataset line this record was parsed from.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The record's category label, if present as a string.
    pub fn category(&self) -> Option<&str> {
        self.fields.get("category").and_then(Value::as_str)
    }

    /// The model's correctness verdict, if present as a boolean.
    pub fn is_correct(&self, model: Model) -> Option<bool> {
        self.fields
            .get(model.correctness_field())
            .and_then(Value::as_bool)
    }
}

/// Correct/total counters for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryTally {
    /// Records marked correct for the evaluated model.
    pub correct: usize,
    /// Records seen in this category.
    pub total: usize,
}

impl CategoryTally {
    /// Accuracy as a percentage; 0.0 when the tally is empty.
    pub fn accuracy(self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            100.0 * self.correct as f64 / self.total as f64
        }
    }
}

/// Per-model evaluation output: category tallies plus global counters.
///
/// Computed once per model per run and never persisted.
#[derive(Debug, Clone)]
pub struct EvaluationResult {
    /// The model these numbers describe.
    pub model: Model,
    /// Correct/total counters per category, keyed by the raw label.
    pub categories: HashMap<String, CategoryTally>,
    /// Records marked correct across all categories.
    pub total_correct: usize,
    /// Records evaluated for this model.
    pub total_questions: usize,
}

impl EvaluationResult {
    /// Overall accuracy as a percentage; 0.0 for an empty dataset.
    pub fn overall_accuracy(&self) -> f64 {
        if self.total_questions == 0 {
            0.0
        } else {
            100.0 * self.total_correct as f64 / self.total_questions as f64
        }
    }

    /// Categories in ascending lexicographic order of their raw key.
    pub fn sorted_categories(&self) -> Vec<(&str, CategoryTally)> {
        let mut categories: Vec<_> = self
            .categories
            .iter()
            .map(|(name, tally)| (name.as_str(), *tally))
            .collect();
        categories.sort_by(|a, b| a.0.cmp(b.0));
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(line: usize, value: Value) -> Record {
        match value {
            Value::Object(fields) => Record::new(line, fields),
            other => panic!("expected a JSON object, got {other}"),
        }
    }

    #[test]
    fn test_correctness_field_mapping() {
        assert_eq!(Model::Claude.correctness_field(), "is_claude_correct");
        assert_eq!(Model::Triad.correctness_field(), "is_triad_correct");
    }

    #[test]
    fn test_model_display() {
        assert_eq!(Model::Claude.to_string(), "Claude");
        assert_eq!(Model::Triad.to_string(), "Triad");
    }

    #[test]
    fn test_record_accessors() {
        let record = record(
            4,
            json!({
                "category": "roman_law",
                "question": "Who could convene the Senate?",
                "is_claude_correct": true,
                "is_triad_correct": false
            }),
        );

        assert_eq!(record.line(), 4);
        assert_eq!(record.category(), Some("roman_law"));
        assert_eq!(record.is_correct(Model::Claude), Some(true));
        assert_eq!(record.is_correct(Model::Triad), Some(false));
    }

    #[test]
    fn test_record_missing_and_wrong_typed_fields() {
        let record = record(
            1,
            json!({
                "category": 42,
                "is_claude_correct": "yes"
            }),
        );

        // Wrong-typed values read the same as absent ones.
        assert_eq!(record.category(), None);
        assert_eq!(record.is_correct(Model::Claude), None);
        assert_eq!(record.is_correct(Model::Triad), None);
    }

    #[test]
    fn test_tally_accuracy() {
        let tally = CategoryTally {
            correct: 3,
            total: 4,
        };
        assert_eq!(tally.accuracy(), 75.0);
        assert_eq!(CategoryTally::default().accuracy(), 0.0);
    }

    #[test]
    fn test_overall_accuracy_empty_is_zero() {
        let result = EvaluationResult {
            model: Model::Claude,
            categories: HashMap::new(),
            total_correct: 0,
            total_questions: 0,
        };
        assert_eq!(result.overall_accuracy(), 0.0);
    }

    #[test]
    fn test_sorted_categories_by_raw_key() {
        let mut categories = HashMap::new();
        categories.insert("science".to_string(), CategoryTally::default());
        categories.insert("arts".to_string(), CategoryTally::default());
        categories.insert("history".to_string(), CategoryTally::default());

        let result = EvaluationResult {
            model: Model::Triad,
            categories,
            total_correct: 0,
            total_questions: 0,
        };

        let names: Vec<&str> = result
            .sorted_categories()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["arts", "history", "science"]);
    }
}

//! Error taxonomy for dataset loading and aggregation.
//!
//! Every failure here is a deterministic data-quality problem: the driver
//! reports it on stderr and exits non-zero. There are no retries.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors surfaced by the loader and the aggregator.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The dataset path does not exist. The driver follows this one with
    /// usage examples.
    #[error("Dataset file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// A non-blank dataset line did not parse as a JSON object.
    #[error("Failed to parse dataset line {line}: {source} (content: {content:?})")]
    Parse {
        /// 1-based line number in the dataset file.
        line: usize,
        /// The offending line, trimmed.
        content: String,
        #[source]
        source: serde_json::Error,
    },

    /// A record lacks `category` or a model's correctness field. A field
    /// present with the wrong JSON type counts as missing.
    #[error("Record at line {line}: required field \"{field}\" is missing or has the wrong type")]
    MissingField { line: usize, field: String },

    /// Any other I/O failure while reading the dataset.
    #[error("Failed to read dataset: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_not_found_message() {
        let err = EvalError::NotFound {
            path: Path::new("missing.jsonl").to_path_buf(),
        };
        assert_eq!(err.to_string(), "Dataset file not found: missing.jsonl");
    }

    #[test]
    fn test_missing_field_message() {
        let err = EvalError::MissingField {
            line: 7,
            field: "is_triad_correct".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Record at line 7: required field \"is_triad_correct\" is missing or has the wrong type"
        );
    }

    #[test]
    fn test_parse_message_includes_content() {
        let source = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = EvalError::Parse {
            line: 3,
            content: "{oops".to_string(),
            source,
        };
        let message = err.to_string();
        assert!(message.starts_with("Failed to parse dataset line 3:"));
        assert!(message.contains("{oops"));
    }
}

//! Dataset loading.
//!
//! Reads a line-delimited JSON dataset into records, skipping blank lines
//! and failing fast on the first malformed line.

use crate::error::EvalError;
use crate::models::Record;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Load every record from the JSONL dataset at `path`.
///
/// Blank lines (after trimming whitespace) are skipped; every other line
/// must hold one JSON object. Returns the records in file order, or the
/// first error encountered, never a partial result. The file handle is
/// scoped to this call and closes before it returns, on success and error
/// paths alike.
pub fn load_dataset(path: &Path) -> Result<Vec<Record>, EvalError> {
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => EvalError::NotFound {
            path: path.to_path_buf(),
        },
        _ => EvalError::Io(err),
    })?;

    let mut records = Vec::new();
    for (number, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let content = line.trim();
        if content.is_empty() {
            continue;
        }

        let fields: Map<String, Value> =
            serde_json::from_str(content).map_err(|source| EvalError::Parse {
                line: number + 1,
                content: content.to_string(),
                source,
            })?;
        records.push(Record::new(number + 1, fields));
    }

    Ok(records)
}

//! Report rendering.
//!
//! This module builds the per-model accuracy tables and the two-model
//! comparison as plain strings; the driver writes them to stdout.

use crate::models::EvaluationResult;

/// Column width for category and summary labels.
const LABEL_WIDTH: usize = 20;
/// Right-aligned width for accuracy and count values.
const VALUE_WIDTH: usize = 6;
/// Length of the rule separating the table from the summary.
const RULE_WIDTH: usize = 50;

/// Format a raw category key for display: underscores become spaces and
/// each word is capitalized (`ancient_history` → `Ancient History`).
pub fn format_category_name(category: &str) -> String {
    category
        .replace('_', " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Render the report block for one model's results.
///
/// Categories appear in ascending order of their raw key, each line
/// holding the display name and the accuracy to one decimal place; the
/// summary repeats the layout for the overall numbers.
pub fn render_model_report(result: &EvaluationResult) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("\n=== {} Results ===\n", result.model));
    out.push_str("Results by Category:\n");
    out.push_str(&rule);
    out.push('\n');

    for (category, tally) in result.sorted_categories() {
        out.push_str(&format!(
            "{:<width$} {:>value$.1}%\n",
            format_category_name(category),
            tally.accuracy(),
            width = LABEL_WIDTH,
            value = VALUE_WIDTH,
        ));
    }

    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "{:<width$} {:>value$.1}%\n",
        "Overall",
        result.overall_accuracy(),
        width = LABEL_WIDTH,
        value = VALUE_WIDTH,
    ));
    out.push_str(&format!(
        "{:<width$} {:>value$}\n",
        "Total Correct",
        result.total_correct,
        width = LABEL_WIDTH,
        value = VALUE_WIDTH,
    ));
    out.push_str(&format!(
        "{:<width$} {:>value$}\n",
        "Total Questions",
        result.total_questions,
        width = LABEL_WIDTH,
        value = VALUE_WIDTH,
    ));

    out
}

/// Render the claude-vs-triad comparison block.
///
/// Improvement is triad minus claude, printed with an explicit sign so a
/// regression reads `-2.0%` rather than `+-2.0%`.
pub fn render_comparison(claude: &EvaluationResult, triad: &EvaluationResult) -> String {
    let improvement = triad.overall_accuracy() - claude.overall_accuracy();
    let mut out = String::new();

    out.push_str("\n=== Comparison ===\n");
    out.push_str(&format!(
        "Claude Accuracy: {:.1}%\n",
        claude.overall_accuracy()
    ));
    out.push_str(&format!("Triad Accuracy: {:.1}%\n", triad.overall_accuracy()));
    out.push_str(&format!("Improvement: {improvement:+.1}%\n"));

    out
}

// Human output formatting.

use crate::format::decimal::format_fixed;
use crate::tolerance::evaluate::Evaluation;
use crate::tolerance::thresholds::{Mode, ThresholdSet};

/// One line for a single evaluation: the message plus the difference detail.
pub fn render_single(evaluation: &Evaluation, thresholds: &ThresholdSet) -> Vec<String> {
    vec![
        evaluation.message.clone(),
        format!(
            "difference: {} ({})",
            format_fixed(evaluation.difference, thresholds.mode.decimal_places()),
            metric_label(thresholds.mode)
        ),
    ]
}

/// One line per batch row: `label  message`.
pub fn render_batch(rows: &[(String, Evaluation)]) -> Vec<String> {
    rows.iter()
        .map(|(label, evaluation)| format!("{label}  {}", evaluation.message))
        .collect()
}

pub fn render_refusal(code: &str, message: &str) -> Vec<String> {
    vec![
        "Cannot classify the measurement.".to_string(),
        format!("Reason ({code}): {message}."),
    ]
}

fn metric_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Relative => "percent of reference",
        Mode::Absolute => "absolute",
    }
}

// Band classification for one measurement against a threshold set.

use serde::Serialize;

use crate::format::decimal::format_fixed;

use super::band::{Band, Severity};
use super::difference::{absolute_difference, relative_difference};
use super::error::EvalError;
use super::thresholds::{Mode, ThresholdSet};

/// Outcome of classifying one measurement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub band: Band,
    pub severity: Severity,
    pub difference: f64,
    pub message: String,
}

/// Classify `value` against `reference` under `thresholds`.
///
/// The difference metric follows `thresholds.mode`; the message is the
/// severity prefix plus the formatted difference, e.g. `OK(1.50)`.
pub fn evaluate(
    value: f64,
    reference: f64,
    thresholds: &ThresholdSet,
) -> Result<Evaluation, EvalError> {
    thresholds.validate()?;
    if !value.is_finite() {
        return Err(EvalError::InvalidInput {
            field: "value",
            value,
        });
    }
    if !reference.is_finite() {
        return Err(EvalError::InvalidInput {
            field: "reference",
            value: reference,
        });
    }

    let difference = match thresholds.mode {
        Mode::Relative => relative_difference(value, reference),
        Mode::Absolute => absolute_difference(value, reference),
    };
    let band = classify(difference, thresholds);
    let severity = band.severity();
    let message = format!(
        "{}({})",
        severity.prefix(),
        format_fixed(difference, thresholds.mode.decimal_places())
    );
    Ok(Evaluation {
        band,
        severity,
        difference,
        message,
    })
}

/// Closed-interval checks, first match wins. The low warning band is
/// checked before the within band, so a difference sitting exactly on
/// `tol_low` lands in `TolLow`; `tol_high` exactly lands in `WithinTol`.
fn classify(difference: f64, t: &ThresholdSet) -> Band {
    if t.action_low <= difference && difference <= t.tol_low {
        Band::TolLow
    } else if t.tol_low <= difference && difference <= t.tol_high {
        Band::WithinTol
    } else if t.tol_high <= difference && difference <= t.action_high {
        Band::TolHigh
    } else if difference <= t.action_low {
        Band::ActLow
    } else {
        Band::ActHigh
    }
}

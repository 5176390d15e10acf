// Threshold configuration: difference metric plus four ordered boundaries.

use serde::Serialize;

use super::error::EvalError;

/// Which difference metric to apply before classifying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Relative,
    Absolute,
}

impl Mode {
    /// Decimal places used when formatting a difference for display.
    #[inline]
    pub const fn decimal_places(self) -> usize {
        match self {
            Mode::Relative => 1,
            Mode::Absolute => 2,
        }
    }
}

/// Immutable tolerance configuration for one evaluation.
///
/// Boundaries must satisfy
/// `action_low <= tol_low <= tol_high <= action_high`; `validate`
/// enforces this before any classification runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdSet {
    pub mode: Mode,
    pub action_low: f64,
    pub tol_low: f64,
    pub tol_high: f64,
    pub action_high: f64,
}

impl ThresholdSet {
    pub fn new(
        mode: Mode,
        action_low: f64,
        tol_low: f64,
        tol_high: f64,
        action_high: f64,
    ) -> Self {
        Self {
            mode,
            action_low,
            tol_low,
            tol_high,
            action_high,
        }
    }

    pub fn validate(&self) -> Result<(), EvalError> {
        let boundaries = [
            ("act-low", self.action_low),
            ("tol-low", self.tol_low),
            ("tol-high", self.tol_high),
            ("act-high", self.action_high),
        ];
        for (label, boundary) in boundaries {
            if !boundary.is_finite() {
                return Err(EvalError::InvalidThresholds {
                    detail: format!("{label} is not a finite number"),
                });
            }
        }
        for window in boundaries.windows(2) {
            let (low_label, low) = window[0];
            let (high_label, high) = window[1];
            if low > high {
                return Err(EvalError::InvalidThresholds {
                    detail: format!("{low_label} ({low}) exceeds {high_label} ({high})"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Mode, ThresholdSet};

    fn absolute(action_low: f64, tol_low: f64, tol_high: f64, action_high: f64) -> ThresholdSet {
        ThresholdSet::new(Mode::Absolute, action_low, tol_low, tol_high, action_high)
    }

    #[test]
    fn ordered_boundaries_validate() {
        assert!(absolute(-5.0, -2.0, 2.0, 5.0).validate().is_ok());
        // equal boundaries are allowed
        assert!(absolute(-2.0, -2.0, 2.0, 2.0).validate().is_ok());
    }

    #[test]
    fn out_of_order_boundaries_rejected() {
        let err = absolute(-5.0, 3.0, 2.0, 5.0).validate().unwrap_err();
        assert_eq!(err.code(), "E_THRESHOLDS");
        assert!(err.to_string().contains("tol-low"));
    }

    #[test]
    fn non_finite_boundary_rejected() {
        let err = absolute(-5.0, f64::NAN, 2.0, 5.0).validate().unwrap_err();
        assert_eq!(err.code(), "E_THRESHOLDS");
        assert!(err.to_string().contains("finite"));
    }

    #[test]
    fn decimal_places_per_mode() {
        assert_eq!(Mode::Relative.decimal_places(), 1);
        assert_eq!(Mode::Absolute.decimal_places(), 2);
    }
}

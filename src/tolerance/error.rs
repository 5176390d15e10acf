use std::fmt;

/// Evaluation failures. Everything else in the classifier is total.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Threshold boundaries are non-finite or violate the ordering
    /// `action_low <= tol_low <= tol_high <= action_high`.
    InvalidThresholds { detail: String },
    /// `value` or `reference` is NaN or infinite.
    InvalidInput { field: &'static str, value: f64 },
}

impl EvalError {
    /// Stable machine-readable code for JSON output.
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            EvalError::InvalidThresholds { .. } => "E_THRESHOLDS",
            EvalError::InvalidInput { .. } => "E_INPUT",
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::InvalidThresholds { detail } => {
                write!(f, "invalid thresholds: {detail}")
            }
            EvalError::InvalidInput { field, value } => {
                write!(f, "{field} must be a finite number (got {value})")
            }
        }
    }
}

impl std::error::Error for EvalError {}

#[cfg(test)]
mod tests {
    use super::EvalError;

    #[test]
    fn codes_are_stable() {
        let thresholds = EvalError::InvalidThresholds {
            detail: "tol-low (3) exceeds tol-high (2)".to_string(),
        };
        assert_eq!(thresholds.code(), "E_THRESHOLDS");
        assert_eq!(
            thresholds.to_string(),
            "invalid thresholds: tol-low (3) exceeds tol-high (2)"
        );

        let input = EvalError::InvalidInput {
            field: "reference",
            value: f64::NAN,
        };
        assert_eq!(input.code(), "E_INPUT");
        assert_eq!(
            input.to_string(),
            "reference must be a finite number (got NaN)"
        );
    }
}

// JSON output schema assembly.

use serde::Serialize;

use crate::cli::exit::Outcome as RunOutcome;
use crate::tolerance::band::{Band, Severity};
use crate::tolerance::evaluate::Evaluation;
use crate::tolerance::thresholds::ThresholdSet;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Ok,
    Tolerance,
    Action,
    Refusal,
}

impl From<RunOutcome> for Outcome {
    fn from(outcome: RunOutcome) -> Self {
        match outcome {
            RunOutcome::Ok => Outcome::Ok,
            RunOutcome::Tolerance => Outcome::Tolerance,
            RunOutcome::Action => Outcome::Action,
            RunOutcome::Refusal => Outcome::Refusal,
        }
    }
}

/// One evaluated measurement in the `results` array.
#[derive(Debug, Clone, Serialize)]
pub struct ResultRow {
    pub name: Option<String>,
    pub value: f64,
    pub reference: f64,
    pub difference: f64,
    pub band: Band,
    pub severity: Severity,
    pub message: String,
}

impl ResultRow {
    pub fn new(name: Option<String>, value: f64, reference: f64, evaluation: Evaluation) -> Self {
        Self {
            name,
            value,
            reference,
            difference: evaluation.difference,
            band: evaluation.band,
            severity: evaluation.severity,
            message: evaluation.message,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Refusal {
    pub code: String,
    pub message: String,
}

impl Refusal {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    pub version: &'static str,
    pub outcome: Outcome,
    pub thresholds: ThresholdSet,
    pub results: Vec<ResultRow>,
    pub refusal: Option<Refusal>,
}

impl JsonOutput {
    pub fn evaluated(
        outcome: RunOutcome,
        thresholds: ThresholdSet,
        results: Vec<ResultRow>,
    ) -> Self {
        Self {
            version: "qatol.v0",
            outcome: outcome.into(),
            thresholds,
            results,
            refusal: None,
        }
    }

    pub fn refusal(thresholds: ThresholdSet, refusal: Refusal) -> Self {
        Self {
            version: "qatol.v0",
            outcome: Outcome::Refusal,
            thresholds,
            results: Vec::new(),
            refusal: Some(refusal),
        }
    }
}

pub fn render_json(output: &JsonOutput) -> Result<String, serde_json::Error> {
    serde_json::to_string(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tolerance::evaluate::evaluate;
    use crate::tolerance::thresholds::Mode;

    fn window() -> ThresholdSet {
        ThresholdSet::new(Mode::Absolute, -5.0, -2.0, 2.0, 5.0)
    }

    #[test]
    fn renders_evaluated_json_shape() {
        let thresholds = window();
        let evaluation = evaluate(11.5, 10.0, &thresholds).expect("evaluate");
        let row = ResultRow::new(Some("dose".to_string()), 11.5, 10.0, evaluation);
        let output = JsonOutput::evaluated(RunOutcome::Ok, thresholds, vec![row]);
        let value = serde_json::to_value(output).expect("json");
        assert_eq!(value["version"], "qatol.v0");
        assert_eq!(value["outcome"], "OK");
        assert_eq!(value["thresholds"]["mode"], "absolute");
        assert_eq!(value["thresholds"]["action_low"], -5.0);
        assert_eq!(value["thresholds"]["tol_low"], -2.0);
        assert_eq!(value["thresholds"]["tol_high"], 2.0);
        assert_eq!(value["thresholds"]["action_high"], 5.0);
        assert_eq!(value["results"][0]["band"], "ok");
        assert_eq!(value["results"][0]["severity"], "ok");
        assert_eq!(value["results"][0]["message"], "OK(1.50)");
        assert!(value["refusal"].is_null());
    }

    #[test]
    fn renders_refusal_json() {
        let output = JsonOutput::refusal(
            window(),
            Refusal::new("E_INPUT", "value must be a finite number (got NaN)"),
        );
        let value = serde_json::to_value(output).expect("json");
        assert_eq!(value["outcome"], "REFUSAL");
        assert_eq!(value["refusal"]["code"], "E_INPUT");
        assert!(value["results"].as_array().expect("array").is_empty());
    }

    #[test]
    fn band_codes_match_original_labels() {
        let thresholds = window();
        let evaluation = evaluate(13.0, 10.0, &thresholds).expect("evaluate");
        let row = ResultRow::new(None, 13.0, 10.0, evaluation);
        let value = serde_json::to_value(row).expect("json");
        assert_eq!(value["band"], "tol_high");
        assert_eq!(value["severity"], "tolerance");
    }
}

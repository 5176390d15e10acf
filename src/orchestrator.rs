//! Run orchestration: gather measurements → evaluate → render.

use std::error::Error;
use std::fs::File;
use std::path::Path;

use crate::batch::reader::{Measurement, read_measurements};
use crate::cli::args::Args;
use crate::cli::exit::Outcome;
use crate::output::human::{render_batch, render_refusal, render_single};
use crate::output::json::{JsonOutput, Refusal, ResultRow, render_json};
use crate::tolerance::evaluate::{Evaluation, evaluate};
use crate::tolerance::thresholds::ThresholdSet;

pub struct RunResult {
    pub outcome: Outcome,
    pub output: String,
}

struct RefusalPayload {
    code: &'static str,
    message: String,
}

pub fn run(args: &Args) -> Result<RunResult, Box<dyn Error>> {
    let thresholds = args.thresholds();

    if let Err(err) = thresholds.validate() {
        return finish_refusal(
            args,
            thresholds,
            RefusalPayload {
                code: err.code(),
                message: err.to_string(),
            },
        );
    }

    let measurements = match gather_measurements(args) {
        Ok(measurements) => measurements,
        Err(payload) => return finish_refusal(args, thresholds, payload),
    };

    let mut evaluated: Vec<(Measurement, Evaluation)> = Vec::with_capacity(measurements.len());
    let mut outcome = Outcome::Ok;
    for (index, measurement) in measurements.into_iter().enumerate() {
        match evaluate(measurement.value, measurement.reference, &thresholds) {
            Ok(evaluation) => {
                outcome = outcome.worst(Outcome::from_severity(evaluation.severity));
                evaluated.push((measurement, evaluation));
            }
            Err(err) => {
                let message = if args.input.is_some() {
                    format!("{}: {err}", measurement.label(index))
                } else {
                    err.to_string()
                };
                return finish_refusal(
                    args,
                    thresholds,
                    RefusalPayload {
                        code: err.code(),
                        message,
                    },
                );
            }
        }
    }

    let output = if args.json {
        let rows = evaluated
            .into_iter()
            .map(|(measurement, evaluation)| {
                ResultRow::new(
                    measurement.name,
                    measurement.value,
                    measurement.reference,
                    evaluation,
                )
            })
            .collect();
        let mut text = render_json(&JsonOutput::evaluated(outcome, thresholds, rows))?;
        text.push('\n');
        text
    } else {
        let lines = if args.input.is_some() {
            let rows: Vec<(String, Evaluation)> = evaluated
                .iter()
                .enumerate()
                .map(|(index, (measurement, evaluation))| {
                    (measurement.label(index), evaluation.clone())
                })
                .collect();
            render_batch(&rows)
        } else {
            match evaluated.as_slice() {
                [(_, evaluation)] => render_single(evaluation, &thresholds),
                _ => Vec::new(),
            }
        };
        join_lines(lines)
    };

    Ok(RunResult { outcome, output })
}

fn gather_measurements(args: &Args) -> Result<Vec<Measurement>, RefusalPayload> {
    match (&args.input, args.value, args.reference) {
        (Some(path), _, _) => read_batch(path),
        (None, Some(value), Some(reference)) => Ok(vec![Measurement {
            name: None,
            value,
            reference,
        }]),
        // clap enforces the positionals; kept total anyway
        (None, _, _) => Err(RefusalPayload {
            code: "E_INPUT",
            message: "value and reference are required".to_string(),
        }),
    }
}

fn read_batch(path: &Path) -> Result<Vec<Measurement>, RefusalPayload> {
    let file = File::open(path).map_err(|err| RefusalPayload {
        code: "E_IO",
        message: format!("{}: {err}", path.display()),
    })?;
    read_measurements(file).map_err(|err| RefusalPayload {
        code: "E_CSV",
        message: format!("{}: {err}", path.display()),
    })
}

fn finish_refusal(
    args: &Args,
    thresholds: ThresholdSet,
    payload: RefusalPayload,
) -> Result<RunResult, Box<dyn Error>> {
    let output = if args.json {
        let refusal = Refusal::new(payload.code, payload.message);
        let mut text = render_json(&JsonOutput::refusal(thresholds, refusal))?;
        text.push('\n');
        text
    } else {
        join_lines(render_refusal(payload.code, &payload.message))
    };
    Ok(RunResult {
        outcome: Outcome::Refusal,
        output,
    })
}

fn join_lines(lines: Vec<String>) -> String {
    let mut output = lines.join("\n");
    output.push('\n');
    output
}

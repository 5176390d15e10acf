use std::path::PathBuf;

use clap::Parser;

use crate::tolerance::thresholds::{Mode, ThresholdSet};

/// CLI argument parsing & validation.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "qatol",
    about = "Classify measured values against reference tolerances for QA review.",
    override_usage = "qatol [<VALUE> <REFERENCE> | --input <measurements.csv>] --act-low <float> --tol-low <float> --tol-high <float> --act-high <float> [--relative] [--json]"
)]
pub struct Args {
    /// Measured value (omit when using --input).
    #[arg(
        value_name = "VALUE",
        required_unless_present = "input",
        allow_negative_numbers = true,
        value_parser = parse_measurement
    )]
    pub value: Option<f64>,

    /// Reference value the measurement is compared against.
    #[arg(
        value_name = "REFERENCE",
        required_unless_present = "input",
        allow_negative_numbers = true,
        value_parser = parse_measurement
    )]
    pub reference: Option<f64>,

    /// Evaluate a CSV of measurements (headers: value, reference, optional name).
    #[arg(long, value_name = "CSV", conflicts_with_all = ["value", "reference"])]
    pub input: Option<PathBuf>,

    /// Lower action boundary.
    #[arg(long = "act-low", value_name = "FLOAT", allow_hyphen_values = true, value_parser = parse_boundary)]
    pub act_low: f64,

    /// Lower tolerance boundary.
    #[arg(long = "tol-low", value_name = "FLOAT", allow_hyphen_values = true, value_parser = parse_boundary)]
    pub tol_low: f64,

    /// Upper tolerance boundary.
    #[arg(long = "tol-high", value_name = "FLOAT", allow_hyphen_values = true, value_parser = parse_boundary)]
    pub tol_high: f64,

    /// Upper action boundary.
    #[arg(long = "act-high", value_name = "FLOAT", allow_hyphen_values = true, value_parser = parse_boundary)]
    pub act_high: f64,

    /// Compare by percent difference instead of raw difference.
    #[arg(long)]
    pub relative: bool,

    /// Emit JSON output (single object).
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn parse() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    pub fn mode(&self) -> Mode {
        if self.relative {
            Mode::Relative
        } else {
            Mode::Absolute
        }
    }

    pub fn thresholds(&self) -> ThresholdSet {
        ThresholdSet::new(
            self.mode(),
            self.act_low,
            self.tol_low,
            self.tol_high,
            self.act_high,
        )
    }
}

fn parse_measurement(raw: &str) -> Result<f64, String> {
    parse_finite(raw, "measurement")
}

fn parse_boundary(raw: &str) -> Result<f64, String> {
    parse_finite(raw, "boundary")
}

fn parse_finite(raw: &str, label: &str) -> Result<f64, String> {
    let value = raw
        .parse::<f64>()
        .map_err(|_| format!("{label} must be a valid number"))?;
    if !value.is_finite() {
        return Err(format!("{label} must be a finite number"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::Args;
    use crate::tolerance::thresholds::Mode;
    use clap::Parser;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(argv)
    }

    const WINDOW: [&str; 8] = [
        "--act-low", "-5", "--tol-low", "-2", "--tol-high", "2", "--act-high", "5",
    ];

    fn with_window(head: &[&str], tail: &[&str]) -> Vec<String> {
        head.iter()
            .chain(WINDOW.iter())
            .chain(tail.iter())
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn parses_single_evaluation() {
        let argv = with_window(&["qatol", "11.5", "10"], &[]);
        let args = parse(&argv.iter().map(String::as_str).collect::<Vec<_>>()).expect("parse");
        assert_eq!(args.value, Some(11.5));
        assert_eq!(args.reference, Some(10.0));
        assert_eq!(args.mode(), Mode::Absolute);
        let thresholds = args.thresholds();
        assert_eq!(thresholds.action_low, -5.0);
        assert_eq!(thresholds.action_high, 5.0);
    }

    #[test]
    fn relative_flag_switches_mode() {
        let argv = with_window(&["qatol", "11.5", "10"], &["--relative"]);
        let args = parse(&argv.iter().map(String::as_str).collect::<Vec<_>>()).expect("parse");
        assert_eq!(args.mode(), Mode::Relative);
    }

    #[test]
    fn input_replaces_positionals() {
        let argv = with_window(&["qatol", "--input", "rows.csv"], &[]);
        let args = parse(&argv.iter().map(String::as_str).collect::<Vec<_>>()).expect("parse");
        assert!(args.input.is_some());
        assert_eq!(args.value, None);
    }

    #[test]
    fn input_conflicts_with_positionals() {
        let argv = with_window(&["qatol", "11.5", "10", "--input", "rows.csv"], &[]);
        assert!(parse(&argv.iter().map(String::as_str).collect::<Vec<_>>()).is_err());
    }

    #[test]
    fn missing_boundary_is_an_error() {
        assert!(parse(&["qatol", "11.5", "10", "--tol-low", "-2"]).is_err());
    }

    #[test]
    fn negative_measurements_parse() {
        let argv = with_window(&["qatol", "-11.5", "-10"], &[]);
        let args = parse(&argv.iter().map(String::as_str).collect::<Vec<_>>()).expect("parse");
        assert_eq!(args.value, Some(-11.5));
    }

    #[test]
    fn non_finite_boundary_rejected_at_parse() {
        assert!(
            parse(&[
                "qatol", "1", "1", "--act-low", "nan", "--tol-low", "-2", "--tol-high", "2",
                "--act-high", "5",
            ])
            .is_err()
        );
    }
}

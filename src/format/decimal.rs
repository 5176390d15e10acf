// Fixed-decimal formatting for displayed differences.

/// Format `value` with exactly `places` fractional digits.
pub fn format_fixed(value: f64, places: usize) -> String {
    format!("{value:.places$}")
}

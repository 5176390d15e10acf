// Difference metrics: percent and raw deviation from a reference.

/// References smaller than this are treated as zero for the percent metric.
pub const EPSILON: f64 = 1e-10;

/// Percent difference of `measured` from `reference`.
///
/// A reference within `EPSILON` of zero falls back to the absolute
/// difference rather than dividing by a near-zero value.
#[inline]
pub fn relative_difference(measured: f64, reference: f64) -> f64 {
    if reference.abs() < EPSILON {
        return absolute_difference(measured, reference);
    }
    100.0 * (measured - reference) / reference
}

/// Raw signed deviation of `measured` from `reference`.
#[inline]
pub fn absolute_difference(measured: f64, reference: f64) -> f64 {
    measured - reference
}

//! Coefficient-of-variation dispersion estimate.

use statrs::statistics::Statistics;

/// Fallback volatility for series too short or too degenerate to measure.
pub const DEFAULT_VOLATILITY: f64 = 0.05;

/// Population coefficient of variation (`std dev / mean`).
///
/// Returns [`DEFAULT_VOLATILITY`] when the series has fewer than two
/// points or a zero mean. A constant nonzero series legitimately
/// measures 0.
pub fn estimate_volatility(series: &[f64]) -> f64 {
    if series.len() < 2 {
        return DEFAULT_VOLATILITY;
    }
    let mean = series.iter().copied().mean();
    if mean == 0.0 {
        return DEFAULT_VOLATILITY;
    }
    series.iter().copied().population_std_dev() / mean
}

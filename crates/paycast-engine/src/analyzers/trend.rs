//! Least-squares trend estimation over an ordered numeric series.

use serde::{Deserialize, Serialize};

/// An ordinary least-squares line fit against the series index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination, clamped to 0..=1.
    pub r_squared: f64,
    /// Slope normalized by the latest observation — the relative
    /// monthly growth rate consumed downstream.
    pub relative_slope: f64,
}

impl TrendLine {
    /// The flat fit returned for degenerate inputs.
    pub const FLAT: Self = Self {
        slope: 0.0,
        intercept: 0.0,
        r_squared: 0.0,
        relative_slope: 0.0,
    };
}

/// Fit an OLS line over `series` indexed `0..n`.
///
/// Degenerate inputs fall back to [`TrendLine::FLAT`]: fewer than two
/// points or a zero index-variance denominator. A zero latest value
/// zeroes only the relative slope.
pub fn fit(series: &[f64]) -> TrendLine {
    let n = series.len();
    if n < 2 {
        return TrendLine::FLAT;
    }

    let nf = n as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;
    for (i, &y) in series.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    let denominator = nf * sum_x2 - sum_x * sum_x;
    if denominator == 0.0 {
        return TrendLine::FLAT;
    }

    let slope = (nf * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / nf;

    let mean_y = sum_y / nf;
    let ss_total: f64 = series.iter().map(|y| (y - mean_y).powi(2)).sum();
    let ss_residual: f64 = series
        .iter()
        .enumerate()
        .map(|(i, y)| (y - (intercept + slope * i as f64)).powi(2))
        .sum();
    let r_squared = if ss_total == 0.0 {
        0.0
    } else {
        (1.0 - ss_residual / ss_total).clamp(0.0, 1.0)
    };

    let latest = series[n - 1];
    let relative_slope = if latest == 0.0 { 0.0 } else { slope / latest };

    TrendLine {
        slope,
        intercept,
        r_squared,
        relative_slope,
    }
}

/// Relative monthly growth rate of a series (see [`fit`]).
pub fn estimate_trend(series: &[f64]) -> f64 {
    fit(series).relative_slope
}

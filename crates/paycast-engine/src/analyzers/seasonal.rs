//! Seasonal adjustment: calendar-month growth bumps and periodic-index
//! detection.

use serde::{Deserialize, Serialize};

/// Additive growth bump per calendar month, index 0 = January.
/// Nonzero in January, November, and December to model year-end bonus
/// timing.
pub const SEASONAL_BUMPS: [f64; 12] = [
    0.10, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.05, 0.15,
];

/// Normalized-index variance above which a series counts as seasonal.
const SEASONALITY_VARIANCE_THRESHOLD: f64 = 0.02;

/// Seasonal growth bump for a zero-based calendar month.
pub fn seasonal_bump(month_index: usize) -> f64 {
    SEASONAL_BUMPS[month_index % 12]
}

/// Detected periodic structure of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalityProfile {
    pub has_seasonality: bool,
    /// One multiplicative index per period position, averaging 1.
    pub indices: Vec<f64>,
    /// Variance of the normalized indices around 1.
    pub variance: f64,
}

impl SeasonalityProfile {
    /// A flat profile (every index 1) for the given period.
    pub fn flat(period: usize) -> Self {
        Self {
            has_seasonality: false,
            indices: vec![1.0; period.max(1)],
            variance: 0.0,
        }
    }

    /// Multiplicative index for a period position, with the deviation
    /// from 1 scaled by `strength`. Flat profiles always return 1.
    pub fn scaled_index(&self, position: usize, strength: f64) -> f64 {
        if !self.has_seasonality {
            return 1.0;
        }
        let index = self.indices[position % self.indices.len()];
        1.0 + (index - 1.0) * strength
    }
}

/// Detect periodic structure with per-position means over `period`.
///
/// Needs at least two full periods of data; shorter series get a flat
/// profile.
pub fn detect_seasonality(series: &[f64], period: usize) -> SeasonalityProfile {
    if period == 0 || series.len() < period * 2 {
        return SeasonalityProfile::flat(period);
    }

    let mut sums = vec![0.0; period];
    let mut counts = vec![0usize; period];
    for (i, &value) in series.iter().enumerate() {
        sums[i % period] += value;
        counts[i % period] += 1;
    }

    let means: Vec<f64> = sums
        .iter()
        .zip(&counts)
        .map(|(&sum, &count)| if count > 0 { sum / count as f64 } else { 1.0 })
        .collect();

    // Normalize so the indices average to 1
    let total: f64 = means.iter().sum();
    let indices: Vec<f64> = if total > 0.0 {
        means
            .iter()
            .map(|&m| m * period as f64 / total)
            .collect()
    } else {
        vec![1.0; period]
    };

    let variance =
        indices.iter().map(|&v| (v - 1.0).powi(2)).sum::<f64>() / period as f64;

    SeasonalityProfile {
        has_seasonality: variance > SEASONALITY_VARIANCE_THRESHOLD,
        indices,
        variance,
    }
}

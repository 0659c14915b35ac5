//! Cross-scenario normalization and weighted ranking.

use serde::{Deserialize, Serialize};
use tracing::debug;

use paycast_core::errors::RankError;
use paycast_core::types::collections::FxHashMap;

use crate::models::PredictionResult;

/// Ranking weight on total projected income.
pub const WEIGHT_TOTAL_SALARY: f64 = 0.5;
/// Ranking weight on the confidence level used.
pub const WEIGHT_ACCURACY: f64 = 0.3;
/// Ranking weight on the projected increase.
pub const WEIGHT_INCREASE: f64 = 0.2;

/// Minimum computed results for a meaningful comparison.
pub const MIN_COMPARABLE: usize = 2;

/// A scenario's position in a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedScenario {
    pub id: String,
    /// Normalized 0..=1 composite of income, accuracy, and increase.
    pub recommendation_score: f64,
}

/// Rank computed results descending by recommendation score.
///
/// Each of the three signals (sum of projected salaries, confidence
/// level, total increase) is min-max normalized across the set; a
/// degenerate signal (max equals min) contributes 0 for every scenario.
/// Ties keep id order, so the output is deterministic.
pub fn rank_scenarios(
    results: &FxHashMap<String, PredictionResult>,
) -> Result<Vec<RankedScenario>, RankError> {
    if results.len() < MIN_COMPARABLE {
        return Err(RankError::InsufficientScenarios {
            got: results.len(),
            required: MIN_COMPARABLE,
        });
    }

    let mut ids: Vec<&String> = results.keys().collect();
    ids.sort();

    let signals: Vec<(f64, f64, f64)> = ids
        .iter()
        .map(|id| {
            let result = &results[id.as_str()];
            let total: f64 = result.predicted_salaries.iter().sum();
            (total, result.accuracy, result.total_increase)
        })
        .collect();

    let salary_range = min_max(signals.iter().map(|s| s.0));
    let accuracy_range = min_max(signals.iter().map(|s| s.1));
    let increase_range = min_max(signals.iter().map(|s| s.2));

    let mut ranked: Vec<RankedScenario> = ids
        .iter()
        .zip(&signals)
        .map(|(id, &(total, accuracy, increase))| {
            let score = WEIGHT_TOTAL_SALARY * normalize(total, salary_range)
                + WEIGHT_ACCURACY * normalize(accuracy, accuracy_range)
                + WEIGHT_INCREASE * normalize(increase, increase_range);
            RankedScenario {
                id: (*id).clone(),
                recommendation_score: score,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.recommendation_score.total_cmp(&a.recommendation_score));
    debug!(count = ranked.len(), "ranked scenario results");
    Ok(ranked)
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
        (min.min(v), max.max(v))
    })
}

fn normalize(value: f64, (min, max): (f64, f64)) -> f64 {
    if max - min == 0.0 {
        return 0.0;
    }
    (value - min) / (max - min)
}

//! Forecast result types.

use serde::{Deserialize, Serialize};

use crate::factors::KeyFactor;

/// One projected month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyEntry {
    /// Month label, `YYYY-MM`.
    pub month: String,
    pub base_salary: f64,
    pub overtime_pay: f64,
    pub bonus_amount: f64,
    pub total_salary: f64,
    /// Month-over-month change ratio; 0 for the first projected month.
    pub change: f64,
}

/// Output of one forecast run.
///
/// The parallel arrays all have one entry per projected month. A run
/// either fully succeeds or yields an error; results are never
/// partially updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub month_labels: Vec<String>,
    pub predicted_salaries: Vec<f64>,
    pub confidence_upper: Vec<f64>,
    pub confidence_lower: Vec<f64>,
    pub base_salaries: Vec<f64>,
    pub overtime_pays: Vec<f64>,
    pub bonus_amounts: Vec<f64>,
    /// Per-month detail rows mirroring the parallel arrays.
    pub monthly: Vec<MonthlyEntry>,
    /// Mean of the projected totals.
    pub average_salary: f64,
    /// Last projected month over the first, minus one.
    pub total_increase: f64,
    /// The confidence level the run used.
    pub accuracy: f64,
    /// Top contributing factors by weighted magnitude.
    pub key_factors: Vec<KeyFactor>,
    /// Stamped by ranking; `None` until the result has been compared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation_score: Option<f64>,
}

/// Mean of the projected totals and the first-to-last increase ratio.
pub(crate) fn summarize(predicted: &[f64]) -> (f64, f64) {
    if predicted.is_empty() {
        return (0.0, 0.0);
    }
    let average = predicted.iter().sum::<f64>() / predicted.len() as f64;
    let first = predicted[0];
    let last = predicted[predicted.len() - 1];
    let increase = if first == 0.0 { 0.0 } else { last / first - 1.0 };
    (average, increase)
}

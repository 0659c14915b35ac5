//! Weighted moving-average strategy for short-horizon stability.

use std::collections::VecDeque;

use paycast_core::config::{ModelType, MovingAverageModelConfig, WeightProfile};
use paycast_core::errors::ForecastError;
use paycast_core::types::month::{format_month_label, project_months};
use paycast_core::types::HistoricalSalaryRecord;

use super::types::{summarize, MonthlyEntry, PredictionResult};
use super::{confidence_margin, validate_inputs, ForecastModel};
use crate::analyzers::trend::estimate_trend;
use crate::analyzers::volatility::estimate_volatility;
use crate::factors::{FactorData, FactorKind, KeyFactor};

/// Trend share applied to the averaged base salary.
const BASE_TREND_SHARE: f64 = 0.5;
/// Trend share applied to the averaged overtime.
const OVERTIME_TREND_SHARE: f64 = 0.3;
/// Trend share applied to the averaged bonus.
const BONUS_TREND_SHARE: f64 = 0.2;

/// Weighted average over a rolling window of the most recent months.
/// Each projection slides the window forward over its own output.
pub struct MovingAverageModel {
    config: MovingAverageModelConfig,
}

impl MovingAverageModel {
    pub fn new(config: MovingAverageModelConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(MovingAverageModelConfig::default())
    }
}

impl ForecastModel for MovingAverageModel {
    fn model_type(&self) -> ModelType {
        ModelType::MovingAverage
    }

    fn confidence_level(&self) -> f64 {
        self.config.confidence_level
    }

    fn predict(
        &self,
        history: &[HistoricalSalaryRecord],
        _factors: &FactorData<'_>,
        _weights: WeightProfile,
        months: usize,
    ) -> Result<PredictionResult, ForecastError> {
        validate_inputs(history, months)?;

        let window = self.config.window_size.clamp(2, history.len());
        let weights = window_weights(&self.config.weights, window);

        let totals: Vec<f64> = history.iter().map(|r| r.total_salary).collect();
        let growth_rate = estimate_trend(&totals);
        let volatility = estimate_volatility(&totals);

        let latest = &history[history.len() - 1];
        let dates = project_months(&latest.month, months)?;

        // Rolling window, oldest first
        let mut window_vals: VecDeque<(f64, f64, f64)> = history[history.len() - window..]
            .iter()
            .map(|r| (r.base_salary, r.overtime_pay, r.bonus_amount))
            .collect();

        let mut month_labels = Vec::with_capacity(months);
        let mut predicted_salaries: Vec<f64> = Vec::with_capacity(months);
        let mut confidence_upper = Vec::with_capacity(months);
        let mut confidence_lower = Vec::with_capacity(months);
        let mut base_salaries = Vec::with_capacity(months);
        let mut overtime_pays = Vec::with_capacity(months);
        let mut bonus_amounts = Vec::with_capacity(months);
        let mut monthly = Vec::with_capacity(months);

        for (i, date) in dates.iter().enumerate() {
            let label = format_month_label(*date);

            // Weights apply newest-first across the window
            let mut base = 0.0;
            let mut overtime = 0.0;
            let mut bonus = 0.0;
            for (j, (b, o, bo)) in window_vals.iter().rev().enumerate() {
                base += b * weights[j];
                overtime += o * weights[j];
                bonus += bo * weights[j];
            }

            base *= 1.0 + growth_rate * BASE_TREND_SHARE;
            overtime *= 1.0 + growth_rate * OVERTIME_TREND_SHARE;
            bonus *= 1.0 + growth_rate * BONUS_TREND_SHARE;

            let total = base + overtime + bonus;
            let margin =
                confidence_margin(total, volatility, i, months, self.config.confidence_level);
            let change = if i == 0 {
                0.0
            } else {
                total / predicted_salaries[i - 1] - 1.0
            };

            month_labels.push(label.clone());
            base_salaries.push(base);
            overtime_pays.push(overtime);
            bonus_amounts.push(bonus);
            predicted_salaries.push(total);
            confidence_upper.push(total + margin);
            confidence_lower.push(total - margin);
            monthly.push(MonthlyEntry {
                month: label,
                base_salary: base,
                overtime_pay: overtime,
                bonus_amount: bonus,
                total_salary: total,
                change,
            });

            window_vals.pop_front();
            window_vals.push_back((base, overtime, bonus));
        }

        let (average_salary, total_increase) = summarize(&predicted_salaries);

        let factors = vec![
            KeyFactor::new(FactorKind::RecentPattern, 1.0, 1.0),
            KeyFactor::new(FactorKind::Trend, growth_rate, 1.0),
        ];

        Ok(PredictionResult {
            month_labels,
            predicted_salaries,
            confidence_upper,
            confidence_lower,
            base_salaries,
            overtime_pays,
            bonus_amounts,
            monthly,
            average_salary,
            total_increase,
            accuracy: self.config.confidence_level,
            key_factors: factors,
            recommendation_score: None,
        })
    }
}

/// Normalized window weights, newest first. Regenerates a descending
/// triangular profile when the configured length does not match.
fn window_weights(configured: &[f64], window: usize) -> Vec<f64> {
    let mut weights: Vec<f64> = configured.iter().copied().take(window).collect();
    if weights.len() != window {
        let sum = (window * (window + 1) / 2) as f64;
        weights = (0..window).map(|i| (window - i) as f64 / sum).collect();
    }
    let total: f64 = weights.iter().sum();
    if total > 0.0 {
        weights.iter().map(|w| w / total).collect()
    } else {
        vec![1.0 / window as f64; window]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history() -> Vec<HistoricalSalaryRecord> {
        let months = [
            "2025-01", "2025-02", "2025-03", "2025-04", "2025-05", "2025-06",
        ];
        let bases = [27000.0, 27200.0, 27400.0, 27600.0, 27800.0, 28000.0];
        months
            .iter()
            .zip(bases)
            .map(|(month, base)| HistoricalSalaryRecord {
                month: month.to_string(),
                base_salary: base,
                overtime_pay: 1800.0,
                bonus_amount: 900.0,
                total_salary: base + 2700.0,
                attendance_rate: 0.95,
                performance_score: 3.5,
            })
            .collect()
    }

    fn no_factors() -> FactorData<'static> {
        FactorData {
            reviews: &[],
            attendance: &[],
            tenure_years: 0.0,
            current_month: 5,
        }
    }

    #[test]
    fn test_window_weights_normalize_configured() {
        let weights = window_weights(&[0.5, 0.3, 0.2], 3);
        assert_eq!(weights, vec![0.5, 0.3, 0.2]);
        assert!((weights.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_window_weights_regenerate_on_mismatch() {
        // Triangular profile for window 4: 4/10, 3/10, 2/10, 1/10
        let weights = window_weights(&[0.5, 0.3, 0.2], 4);
        assert_eq!(weights.len(), 4);
        assert!((weights[0] - 0.4).abs() < 1e-12);
        assert!((weights[3] - 0.1).abs() < 1e-12);
        assert!(weights.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_window_weights_guard_zero_sum() {
        let weights = window_weights(&[0.0, 0.0], 2);
        assert_eq!(weights, vec![0.5, 0.5]);
    }

    #[test]
    fn test_arrays_match_horizon() {
        let model = MovingAverageModel::with_defaults();
        let result = model
            .predict(&history(), &no_factors(), WeightProfile::BALANCED, 4)
            .unwrap();
        assert_eq!(result.predicted_salaries.len(), 4);
        assert_eq!(result.month_labels[0], "2025-07");
        for i in 0..4 {
            assert!(result.confidence_upper[i] >= result.predicted_salaries[i]);
            assert!(result.predicted_salaries[i] >= result.confidence_lower[i]);
        }
    }

    #[test]
    fn test_projection_stays_near_recent_level() {
        let model = MovingAverageModel::with_defaults();
        let result = model
            .predict(&history(), &no_factors(), WeightProfile::BALANCED, 6)
            .unwrap();
        // A weighted average of the recent window cannot stray far from it
        for total in &result.predicted_salaries {
            assert!(*total > 29000.0 && *total < 32000.0);
        }
    }

    #[test]
    fn test_rising_history_projects_rising_average() {
        let model = MovingAverageModel::with_defaults();
        let result = model
            .predict(&history(), &no_factors(), WeightProfile::BALANCED, 3)
            .unwrap();
        assert!(result.total_increase > 0.0);
        assert_eq!(result.key_factors[0].kind, FactorKind::RecentPattern);
    }

    #[test]
    fn test_refuses_short_history() {
        let model = MovingAverageModel::with_defaults();
        assert!(matches!(
            model.predict(&history()[..4], &no_factors(), WeightProfile::BALANCED, 3),
            Err(ForecastError::InsufficientHistory { .. })
        ));
    }
}

//! Seasonal-adjustment strategy: linear trend scaled by detected
//! periodic indices. Suited to salaries with a pronounced annual or
//! quarterly rhythm.

use chrono::Datelike;

use paycast_core::config::{ModelType, SeasonalModelConfig, WeightProfile};
use paycast_core::errors::ForecastError;
use paycast_core::types::month::{format_month_label, parse_month_label, project_months};
use paycast_core::types::HistoricalSalaryRecord;

use super::types::{summarize, MonthlyEntry, PredictionResult};
use super::{confidence_margin, validate_inputs, ForecastModel};
use crate::analyzers::seasonal::detect_seasonality;
use crate::analyzers::trend::fit;
use crate::analyzers::volatility::estimate_volatility;
use crate::factors::{FactorData, FactorKind, KeyFactor};

/// Trend plus multiplicative seasonal indices over the total-salary
/// series. Ignores the weighted factor signals; seasonality and trend
/// carry the projection.
pub struct SeasonalModel {
    config: SeasonalModelConfig,
}

impl SeasonalModel {
    pub fn new(config: SeasonalModelConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(SeasonalModelConfig::default())
    }
}

impl ForecastModel for SeasonalModel {
    fn model_type(&self) -> ModelType {
        ModelType::Seasonal
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

        let totals: Vec<f64> = history.iter().map(|r| r.total_salary).collect();
        let trend = fit(&totals);
        let period = self.config.seasonal_period.max(1);
        let seasonality = detect_seasonality(&totals, period);
        let volatility = estimate_volatility(&totals);

        let latest = &history[history.len() - 1];
        let dates = project_months(&latest.month, months)?;
        let last_month0 = parse_month_label(&latest.month)?.month0() as usize;
        let base_value = totals[totals.len() - 1];

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

            let position = (last_month0 + i + 1) % period;
            let seasonal_index =
                seasonality.scaled_index(position, self.config.seasonal_strength);

            let trend_value = base_value * (1.0 + trend.relative_slope * (i as f64 + 1.0));
            let trend_ratio = if base_value == 0.0 {
                1.0
            } else {
                trend_value / base_value
            };

            let total = trend_value * seasonal_index;
            let base = latest.base_salary * trend_ratio;
            let overtime = latest.overtime_pay * trend_ratio * seasonal_index;
            let bonus = total - base - overtime;

            let margin = confidence_margin(total, volatility, i, months, self.config.confidence_level);
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
        }

        let (average_salary, total_increase) = summarize(&predicted_salaries);

        let mut factors = Vec::with_capacity(2);
        if seasonality.has_seasonality {
            factors.push(KeyFactor::new(FactorKind::Seasonal, seasonality.variance, 1.0));
        }
        factors.push(KeyFactor::new(FactorKind::Trend, trend.relative_slope, 1.0));

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

#[cfg(test)]
mod tests {
    use super::*;

    // 24 months with a pronounced December spike, mildly rising
    fn seasonal_history() -> Vec<HistoricalSalaryRecord> {
        (0..24)
            .map(|i| {
                let year = 2023 + i / 12;
                let month = i % 12 + 1;
                let base = 28000.0 + 50.0 * i as f64;
                let bonus = if month == 12 { 25000.0 } else { 1000.0 };
                HistoricalSalaryRecord {
                    month: format!("{year:04}-{month:02}"),
                    base_salary: base,
                    overtime_pay: 2000.0,
                    bonus_amount: bonus,
                    total_salary: base + 2000.0 + bonus,
                    attendance_rate: 0.95,
                    performance_score: 3.5,
                }
            })
            .collect()
    }

    fn no_factors() -> FactorData<'static> {
        FactorData {
            reviews: &[],
            attendance: &[],
            tenure_years: 0.0,
            current_month: 0,
        }
    }

    #[test]
    fn test_detects_december_spike() {
        let model = SeasonalModel::with_defaults();
        let result = model
            .predict(&seasonal_history(), &no_factors(), WeightProfile::BALANCED, 12)
            .unwrap();
        // History ends in December; index 11 of the projection is the
        // next December and should stand out against November.
        assert!(result.predicted_salaries[11] > result.predicted_salaries[10] * 1.05);
        assert!(result
            .key_factors
            .iter()
            .any(|f| f.kind == FactorKind::Seasonal));
    }

    #[test]
    fn test_components_sum_to_total() {
        let model = SeasonalModel::with_defaults();
        let result = model
            .predict(&seasonal_history(), &no_factors(), WeightProfile::BALANCED, 6)
            .unwrap();
        for i in 0..6 {
            let sum = result.base_salaries[i] + result.overtime_pays[i] + result.bonus_amounts[i];
            assert!((sum - result.predicted_salaries[i]).abs() < 1e-6);
        }
    }

    #[test]
    fn test_flat_history_reports_trend_only() {
        let history: Vec<HistoricalSalaryRecord> = (0..8)
            .map(|i| HistoricalSalaryRecord {
                month: format!("2025-{:02}", i + 1),
                base_salary: 28000.0,
                overtime_pay: 2000.0,
                bonus_amount: 1000.0,
                total_salary: 31000.0,
                attendance_rate: 0.95,
                performance_score: 3.0,
            })
            .collect();
        let model = SeasonalModel::with_defaults();
        let result = model
            .predict(&history, &no_factors(), WeightProfile::BALANCED, 3)
            .unwrap();
        // Too short for a 12-month period: no seasonal key factor
        assert_eq!(result.key_factors.len(), 1);
        assert_eq!(result.key_factors[0].kind, FactorKind::Trend);
        // Flat series projects flat
        for total in &result.predicted_salaries {
            assert!((total - 31000.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_refuses_short_history() {
        let model = SeasonalModel::with_defaults();
        let short = &seasonal_history()[..5];
        assert!(matches!(
            model.predict(short, &no_factors(), WeightProfile::BALANCED, 3),
            Err(ForecastError::InsufficientHistory { .. })
        ));
    }

    #[test]
    fn test_zero_strength_suppresses_seasonality() {
        let model = SeasonalModel::new(SeasonalModelConfig {
            seasonal_strength: 0.0,
            ..SeasonalModelConfig::default()
        });
        let result = model
            .predict(&seasonal_history(), &no_factors(), WeightProfile::BALANCED, 12)
            .unwrap();
        // With the deviation scaled away, December no longer spikes
        let nov = result.predicted_salaries[10];
        let dec = result.predicted_salaries[11];
        assert!((dec / nov - 1.0).abs() < 0.02);
    }
}

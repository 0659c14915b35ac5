//! Linear-regression strategy — the default forecaster.

use chrono::Datelike;

use paycast_core::config::{LinearModelConfig, ModelType, WeightProfile};
use paycast_core::errors::ForecastError;
use paycast_core::types::month::{format_month_label, project_months};
use paycast_core::types::HistoricalSalaryRecord;

use super::jitter::JitterSource;
use super::types::{summarize, MonthlyEntry, PredictionResult};
use super::{confidence_margin, is_year_end, validate_inputs, ForecastModel};
use crate::analyzers::trend::estimate_trend;
use crate::analyzers::volatility::estimate_volatility;
use crate::factors::{blend_factors, key_factors, BlendedFactors, FactorData};

/// Months an annualized growth rate is prorated over.
const GROWTH_PRORATION_MONTHS: f64 = 24.0;
/// Amplitude of the overtime oscillation.
const OVERTIME_WAVE: f64 = 0.1;
/// Year-end bonus multiplier.
const YEAR_END_BONUS_MULTIPLIER: f64 = 1.5;
/// Bonus sensitivity to the performance factor.
const BONUS_PERFORMANCE_WEIGHT: f64 = 0.2;
/// Bonus sensitivity to the attendance factor.
const BONUS_ATTENDANCE_WEIGHT: f64 = 0.1;

/// Project month-by-month past the last historical record under the
/// blended growth rate.
///
/// The projection is a recurrence: each month extends the previous
/// month's values, not the historical baseline. Growth is linear and
/// prorated, never compounded through the rate itself.
pub fn forecast(
    history: &[HistoricalSalaryRecord],
    blended: &BlendedFactors,
    months: usize,
    confidence_level: f64,
    jitter: &mut JitterSource,
) -> Result<PredictionResult, ForecastError> {
    validate_inputs(history, months)?;

    let latest = &history[history.len() - 1];
    let dates = project_months(&latest.month, months)?;
    let totals: Vec<f64> = history.iter().map(|r| r.total_salary).collect();
    let volatility = estimate_volatility(&totals);

    let mut last_base = latest.base_salary;
    let mut last_overtime = latest.overtime_pay;
    let mut last_bonus = latest.bonus_amount;

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

        let base = last_base
            * (1.0 + blended.growth_rate * (i as f64 + 1.0) / GROWTH_PRORATION_MONTHS);

        let overtime_multiplier =
            1.0 + (i as f64 / 2.0).sin() * OVERTIME_WAVE + jitter.next();
        let overtime = last_overtime * overtime_multiplier;

        let mut bonus = last_bonus;
        if is_year_end(date.month0()) {
            bonus *= YEAR_END_BONUS_MULTIPLIER;
        }
        bonus *= 1.0
            + blended.performance_factor * BONUS_PERFORMANCE_WEIGHT
            + blended.attendance_factor * BONUS_ATTENDANCE_WEIGHT;

        let total = base + overtime + bonus;
        let margin = confidence_margin(total, volatility, i, months, confidence_level);
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

        last_base = base;
        last_overtime = overtime;
        last_bonus = bonus;
    }

    let (average_salary, total_increase) = summarize(&predicted_salaries);
    let factors = key_factors(blended);

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
        accuracy: confidence_level,
        key_factors: factors,
        recommendation_score: None,
    })
}

/// Least-squares base-salary trend blended with weighted
/// performance/attendance/tenure/seasonal factors.
pub struct LinearModel {
    config: LinearModelConfig,
}

impl LinearModel {
    pub fn new(config: LinearModelConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(LinearModelConfig::default())
    }
}

impl ForecastModel for LinearModel {
    fn model_type(&self) -> ModelType {
        ModelType::Linear
    }

    fn confidence_level(&self) -> f64 {
        self.config.confidence_level
    }

    fn predict(
        &self,
        history: &[HistoricalSalaryRecord],
        factors: &FactorData<'_>,
        weights: WeightProfile,
        months: usize,
    ) -> Result<PredictionResult, ForecastError> {
        validate_inputs(history, months)?;

        let base_series: Vec<f64> = history.iter().map(|r| r.base_salary).collect();
        let base_trend = estimate_trend(&base_series);

        let blended = if self.config.use_weighted_factors {
            blend_factors(factors, weights, base_trend)
        } else {
            BlendedFactors::trend_only(base_trend)
        };

        let mut jitter = JitterSource::new(self.config.jitter_seed, self.config.jitter_max);
        forecast(
            history,
            &blended,
            months,
            self.config.confidence_level,
            &mut jitter,
        )
    }
}

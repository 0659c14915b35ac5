//! Forecast strategies over monthly salary history.
//!
//! Every strategy shares the same preconditions (a horizon inside
//! 1..=24 and at least six strictly ascending monthly records) and the
//! same heuristic confidence-band formula, and produces the same
//! [`PredictionResult`] shape.

pub mod jitter;
pub mod linear;
pub mod moving_average;
pub mod seasonal;
pub mod types;

pub use jitter::JitterSource;
pub use linear::{forecast, LinearModel};
pub use moving_average::MovingAverageModel;
pub use seasonal::SeasonalModel;
pub use types::{MonthlyEntry, PredictionResult};

use paycast_core::config::{ModelSettings, ModelType, WeightProfile, MAX_PREDICTION_MONTHS};
use paycast_core::errors::ForecastError;
use paycast_core::types::month::parse_month_label;
use paycast_core::types::HistoricalSalaryRecord;

use crate::factors::FactorData;

/// Hard minimum of monthly records for any forecast. Shorter histories
/// are refused, never silently truncated.
pub const MIN_HISTORY_MONTHS: usize = 6;

/// A forecast strategy over monthly salary history.
pub trait ForecastModel {
    /// Strategy identifier.
    fn model_type(&self) -> ModelType;

    /// Confidence level this instance stamps on results.
    fn confidence_level(&self) -> f64;

    /// Project `months` months past the end of `history`.
    fn predict(
        &self,
        history: &[HistoricalSalaryRecord],
        factors: &FactorData<'_>,
        weights: WeightProfile,
        months: usize,
    ) -> Result<PredictionResult, ForecastError>;
}

/// Build the strategy instance for `model_type` from the settings table.
pub fn build_model(model_type: ModelType, settings: &ModelSettings) -> Box<dyn ForecastModel> {
    match model_type {
        ModelType::Linear => Box::new(LinearModel::new(settings.linear.clone())),
        ModelType::Seasonal => Box::new(SeasonalModel::new(settings.seasonal.clone())),
        ModelType::MovingAverage => {
            Box::new(MovingAverageModel::new(settings.moving_average.clone()))
        }
    }
}

/// Shared preconditions: horizon in range, at least
/// [`MIN_HISTORY_MONTHS`] records, months strictly ascending with no
/// duplicates.
pub(crate) fn validate_inputs(
    history: &[HistoricalSalaryRecord],
    months: usize,
) -> Result<(), ForecastError> {
    if months == 0 || months > MAX_PREDICTION_MONTHS {
        return Err(ForecastError::InvalidHorizon {
            months,
            max: MAX_PREDICTION_MONTHS,
        });
    }
    if history.len() < MIN_HISTORY_MONTHS {
        return Err(ForecastError::InsufficientHistory {
            got: history.len(),
            required: MIN_HISTORY_MONTHS,
        });
    }
    let mut prev = None;
    for record in history {
        let date = parse_month_label(&record.month)?;
        if let Some(p) = prev {
            if date <= p {
                return Err(ForecastError::UnorderedHistory {
                    month: record.month.clone(),
                });
            }
        }
        prev = Some(date);
    }
    Ok(())
}

/// Heuristic confidence half-width for projected month `i`: widens with
/// horizon, narrows with a higher confidence level.
pub(crate) fn confidence_margin(
    total: f64,
    volatility: f64,
    i: usize,
    months: usize,
    confidence_level: f64,
) -> f64 {
    total * volatility * (i as f64 + 1.0) / months as f64 * (1.0 - confidence_level)
}

/// Months that attract the year-end bonus multiplier: November,
/// December, January.
pub(crate) fn is_year_end(month0: u32) -> bool {
    matches!(month0, 0 | 10 | 11)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(month: &str) -> HistoricalSalaryRecord {
        HistoricalSalaryRecord {
            month: month.to_string(),
            base_salary: 28000.0,
            overtime_pay: 2000.0,
            bonus_amount: 1500.0,
            total_salary: 31500.0,
            attendance_rate: 0.95,
            performance_score: 3.5,
        }
    }

    #[test]
    fn test_validate_rejects_short_history() {
        let history: Vec<_> = ["2025-01", "2025-02", "2025-03", "2025-04", "2025-05"]
            .iter()
            .map(|m| record(m))
            .collect();
        assert_eq!(
            validate_inputs(&history, 3),
            Err(ForecastError::InsufficientHistory {
                got: 5,
                required: 6
            })
        );
    }

    #[test]
    fn test_validate_accepts_exactly_six() {
        let history: Vec<_> = [
            "2025-01", "2025-02", "2025-03", "2025-04", "2025-05", "2025-06",
        ]
        .iter()
        .map(|m| record(m))
        .collect();
        assert!(validate_inputs(&history, 3).is_ok());
    }

    #[test]
    fn test_validate_rejects_unordered_and_duplicate_months() {
        let mut history: Vec<_> = [
            "2025-01", "2025-02", "2025-03", "2025-04", "2025-05", "2025-06",
        ]
        .iter()
        .map(|m| record(m))
        .collect();
        history.swap(2, 3);
        assert!(matches!(
            validate_inputs(&history, 3),
            Err(ForecastError::UnorderedHistory { .. })
        ));

        let mut duplicated: Vec<_> = [
            "2025-01", "2025-02", "2025-02", "2025-04", "2025-05", "2025-06",
        ]
        .iter()
        .map(|m| record(m))
        .collect();
        duplicated[2].total_salary = 32000.0;
        assert!(matches!(
            validate_inputs(&duplicated, 3),
            Err(ForecastError::UnorderedHistory { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_horizon() {
        let history: Vec<_> = [
            "2025-01", "2025-02", "2025-03", "2025-04", "2025-05", "2025-06",
        ]
        .iter()
        .map(|m| record(m))
        .collect();
        assert!(matches!(
            validate_inputs(&history, 0),
            Err(ForecastError::InvalidHorizon { .. })
        ));
        assert!(matches!(
            validate_inputs(&history, 25),
            Err(ForecastError::InvalidHorizon { .. })
        ));
    }

    #[test]
    fn test_margin_widens_with_horizon() {
        let near = confidence_margin(30000.0, 0.04, 0, 6, 0.85);
        let far = confidence_margin(30000.0, 0.04, 5, 6, 0.85);
        assert!(far > near);
    }

    #[test]
    fn test_margin_narrows_with_confidence() {
        let loose = confidence_margin(30000.0, 0.04, 3, 6, 0.70);
        let tight = confidence_margin(30000.0, 0.04, 3, 6, 0.95);
        assert!(tight < loose);
    }

    #[test]
    fn test_year_end_months() {
        assert!(is_year_end(0)); // January
        assert!(is_year_end(10)); // November
        assert!(is_year_end(11)); // December
        assert!(!is_year_end(5));
    }
}

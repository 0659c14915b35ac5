//! Blend recent performance, attendance, tenure, and seasonal signals
//! into the expected growth rate for one forecast run.

use serde::{Deserialize, Serialize};
use tracing::debug;

use paycast_core::config::WeightProfile;
use paycast_core::types::{AttendanceSummary, PerformanceReview};

use super::types::{FactorKind, KeyFactor};
use crate::analyzers::seasonal::seasonal_bump;

/// Neutral baseline on the 1..=5 review scale.
pub const PERFORMANCE_BASELINE: f64 = 3.0;
/// Review scale span used to normalize the performance deviation.
pub const PERFORMANCE_SCALE: f64 = 5.0;
/// Neutral on-time rate.
pub const ATTENDANCE_BASELINE: f64 = 0.9;
/// Damping applied to the on-time deviation.
pub const ATTENDANCE_SCALE: f64 = 0.5;
/// Growth increment per year of service.
pub const TENURE_RATE_PER_YEAR: f64 = 0.01;
/// Ceiling on the tenure increment.
pub const TENURE_CAP: f64 = 0.05;
/// Share of the base-salary trend carried into the blend.
pub const TREND_WEIGHT: f64 = 0.5;

/// Trailing reviews/summaries feeding the recent averages.
const RECENT_WINDOW: usize = 3;

/// Weighted contributions below this magnitude are not worth reporting.
const REPORTING_FLOOR: f64 = 0.01;

/// Auxiliary signals for one forecast run.
#[derive(Debug, Clone, Copy)]
pub struct FactorData<'a> {
    pub reviews: &'a [PerformanceReview],
    pub attendance: &'a [AttendanceSummary],
    /// Years of service as of the run.
    pub tenure_years: f64,
    /// Zero-based calendar month the run is made in (0 = January).
    pub current_month: usize,
}

/// The blended growth signals for one forecast run.
///
/// Computed once per run; the forecaster then applies the rate
/// proportionally inside its per-month loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlendedFactors {
    /// Combined expected growth rate fed to the forecaster.
    pub growth_rate: f64,
    pub performance_factor: f64,
    pub attendance_factor: f64,
    pub seasonal_factor: f64,
    pub tenure_bonus: f64,
    /// Relative trend of the base-salary series that seeded the blend.
    pub base_salary_trend: f64,
    /// The profile the blend was taken under.
    pub weights: WeightProfile,
}

impl BlendedFactors {
    /// A blend carrying only the trend signal, with every weighted
    /// factor zeroed. Used when weighted factors are disabled.
    pub fn trend_only(base_salary_trend: f64) -> Self {
        Self {
            growth_rate: base_salary_trend * TREND_WEIGHT,
            performance_factor: 0.0,
            attendance_factor: 0.0,
            seasonal_factor: 0.0,
            tenure_bonus: 0.0,
            base_salary_trend,
            weights: WeightProfile::new(0.0, 0.0, 0.0, 0.0),
        }
    }
}

/// Blend the run's auxiliary signals with the base-salary trend under
/// the given profile.
pub fn blend_factors(
    data: &FactorData<'_>,
    weights: WeightProfile,
    base_salary_trend: f64,
) -> BlendedFactors {
    let performance_factor = performance_factor(data.reviews);
    let attendance_factor = attendance_factor(data.attendance);
    let tenure_bonus = tenure_bonus(data.tenure_years);
    let seasonal_factor = seasonal_bump(data.current_month);

    let growth_rate = base_salary_trend * TREND_WEIGHT
        + performance_factor * weights.performance
        + attendance_factor * weights.attendance
        + tenure_bonus * weights.tenure
        + seasonal_factor * weights.seasonal;
    debug!(
        growth_rate,
        performance = performance_factor,
        attendance = attendance_factor,
        tenure = tenure_bonus,
        seasonal = seasonal_factor,
        "factors blended"
    );

    BlendedFactors {
        growth_rate,
        performance_factor,
        attendance_factor,
        seasonal_factor,
        tenure_bonus,
        base_salary_trend,
        weights,
    }
}

/// The blend's top contributors, ranked by weighted magnitude.
///
/// Returns the top 3 of the four weighted signals; when none clears the
/// reporting floor, a single trend factor stands in.
pub fn key_factors(blended: &BlendedFactors) -> Vec<KeyFactor> {
    let mut factors = vec![
        KeyFactor::new(
            FactorKind::Attendance,
            blended.attendance_factor,
            blended.weights.attendance,
        ),
        KeyFactor::new(
            FactorKind::Performance,
            blended.performance_factor,
            blended.weights.performance,
        ),
        KeyFactor::new(FactorKind::Tenure, blended.tenure_bonus, blended.weights.tenure),
        KeyFactor::new(
            FactorKind::Seasonal,
            blended.seasonal_factor,
            blended.weights.seasonal,
        ),
    ];

    if factors
        .iter()
        .all(|f| f.weighted_value.abs() <= REPORTING_FLOOR)
    {
        return vec![KeyFactor::new(FactorKind::Trend, blended.base_salary_trend, 1.0)];
    }

    factors.sort_by(|a, b| b.weighted_value.abs().total_cmp(&a.weighted_value.abs()));
    factors.truncate(3);
    factors
}

/// `(mean of the last 3 overall scores − 3) / 5`; 0 with no reviews.
fn performance_factor(reviews: &[PerformanceReview]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let recent = &reviews[reviews.len().saturating_sub(RECENT_WINDOW)..];
    let avg = recent.iter().map(|r| r.overall_score).sum::<f64>() / recent.len() as f64;
    (avg - PERFORMANCE_BASELINE) / PERFORMANCE_SCALE
}

/// `(mean of the last 3 on-time rates − 0.9) · 0.5`; 0 with no summaries.
fn attendance_factor(attendance: &[AttendanceSummary]) -> f64 {
    if attendance.is_empty() {
        return 0.0;
    }
    let recent = &attendance[attendance.len().saturating_sub(RECENT_WINDOW)..];
    let avg = recent.iter().map(|a| a.on_time_rate).sum::<f64>() / recent.len() as f64;
    (avg - ATTENDANCE_BASELINE) * ATTENDANCE_SCALE
}

/// 1% per year of service, capped at 5%.
fn tenure_bonus(tenure_years: f64) -> f64 {
    (tenure_years * TENURE_RATE_PER_YEAR).min(TENURE_CAP).max(0.0)
}

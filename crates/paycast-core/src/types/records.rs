//! Input records supplied by the (external) data layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::collections::FxHashMap;

/// One month of salary history for an employee at a store.
///
/// A series is expected sorted ascending by `month` with no duplicate
/// months; the forecaster rejects anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalSalaryRecord {
    /// Month label, `YYYY-MM`.
    pub month: String,
    pub base_salary: f64,
    pub overtime_pay: f64,
    pub bonus_amount: f64,
    pub total_salary: f64,
    /// Attendance rate for the month, 0..=1.
    pub attendance_rate: f64,
    /// Performance score on the 1..=5 review scale.
    pub performance_score: f64,
}

/// A periodic performance review. Only the recent average of
/// `overall_score` feeds the forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReview {
    pub review_date: NaiveDate,
    /// Overall score on the 1..=5 scale, 3 = meets expectations.
    pub overall_score: f64,
    /// Optional per-category breakdown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_scores: Option<FxHashMap<String, f64>>,
}

/// Monthly attendance rollup. Only the recent average of `on_time_rate`
/// feeds the forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Month label, `YYYY-MM`.
    pub month: String,
    /// Share of shifts clocked in on time, 0..=1.
    pub on_time_rate: f64,
    pub absent_days: u32,
    pub late_count: u32,
}

//! Attendance × performance pairing for scatter analysis.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use paycast_core::types::month::parse_month_label;
use paycast_core::types::{AttendanceSummary, PerformanceReview};

/// One attendance/performance observation pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationPoint {
    /// On-time rate for the month.
    pub x: f64,
    /// Overall score of the nearest-dated review.
    pub y: f64,
}

/// Pair each attendance month with its nearest-dated performance review,
/// anchored mid-month. Months with unparseable labels are skipped; empty
/// input on either side yields no points.
pub fn correlate(
    attendance: &[AttendanceSummary],
    reviews: &[PerformanceReview],
) -> Vec<CorrelationPoint> {
    if attendance.is_empty() || reviews.is_empty() {
        return Vec::new();
    }

    attendance
        .iter()
        .filter_map(|summary| {
            let anchor = parse_month_label(&summary.month).ok()?.with_day(15)?;
            let nearest = reviews
                .iter()
                .min_by_key(|review| (review.review_date - anchor).num_days().abs())?;
            Some(CorrelationPoint {
                x: summary.on_time_rate,
                y: nearest.overall_score,
            })
        })
        .collect()
}

//! `YYYY-MM` month-label arithmetic.

use chrono::{Datelike, Months, NaiveDate};

use crate::errors::ForecastError;

/// Parse a `YYYY-MM` label into the first day of that month.
pub fn parse_month_label(label: &str) -> Result<NaiveDate, ForecastError> {
    let invalid = || ForecastError::InvalidMonthLabel(label.to_string());
    let (year, month) = label.split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)
}

/// Format a date back to its `YYYY-MM` label.
pub fn format_month_label(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// The first days of the `count` months following `last`, in order.
pub fn project_months(last: &str, count: usize) -> Result<Vec<NaiveDate>, ForecastError> {
    let start = parse_month_label(last)?;
    (1..=count as u32)
        .map(|i| {
            start
                .checked_add_months(Months::new(i))
                .ok_or_else(|| ForecastError::InvalidMonthLabel(last.to_string()))
        })
        .collect()
}

/// Fractional years of service between hire date and `as_of`, using the
/// payroll convention of a 365-day year. Never negative.
pub fn tenure_years(hire_date: NaiveDate, as_of: NaiveDate) -> f64 {
    let days = (as_of - hire_date).num_days();
    (days as f64 / 365.0).max(0.0)
}

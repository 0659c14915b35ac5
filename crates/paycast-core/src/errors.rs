//! Error taxonomy shared across the Paycast crates.

use thiserror::Error;

/// Errors raised while producing a single forecast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForecastError {
    /// Fewer monthly records than the hard minimum. No partial forecast
    /// is produced from a shorter window.
    #[error("insufficient history: got {got} monthly records, at least {required} required")]
    InsufficientHistory { got: usize, required: usize },

    /// A month label that does not parse as `YYYY-MM`.
    #[error("invalid month label `{0}`")]
    InvalidMonthLabel(String),

    /// History records not strictly ascending by month.
    #[error("history must be sorted ascending by month without duplicates (violated at `{month}`)")]
    UnorderedHistory { month: String },

    /// A projection horizon outside the supported range.
    #[error("prediction horizon of {months} months is outside 1..={max}")]
    InvalidHorizon { months: usize, max: usize },
}

/// Errors raised by the scenario engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScenarioError {
    /// Scenario spec rejected at add time: empty employee id.
    #[error("invalid scenario spec: employee id must not be empty")]
    MissingEmployee,

    /// Scenario spec rejected at add time: empty store id.
    #[error("invalid scenario spec: store id must not be empty")]
    MissingStore,

    /// Scenario spec rejected at add time: horizon outside 1..=24.
    #[error("invalid scenario spec: prediction months {0} outside 1..=24")]
    MonthsOutOfRange(usize),

    /// A run was requested for an id that was never added or was removed.
    #[error("unknown scenario id `{0}`")]
    UnknownScenario(String),

    /// The underlying forecast failed.
    #[error(transparent)]
    Forecast(#[from] ForecastError),
}

/// Errors raised when ranking scenario results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// A comparison needs at least two computed results.
    #[error("scenario comparison requires at least {required} computed results, got {got}")]
    InsufficientScenarios { got: usize, required: usize },
}

//! # paycast-core
//!
//! Shared types, errors, and configuration for the Paycast salary
//! forecasting engine: salary history records, month-label arithmetic,
//! weight profiles, and per-strategy model settings.

pub mod config;
pub mod errors;
pub mod types;

pub use config::{
    LinearModelConfig, ModelSettings, ModelType, MovingAverageModelConfig, ProfileRegistry,
    SeasonalModelConfig, WeightProfile, DEFAULT_CONFIDENCE_LEVEL, MAX_PREDICTION_MONTHS,
};
pub use errors::{ForecastError, RankError, ScenarioError};
pub use types::{AttendanceSummary, HistoricalSalaryRecord, PerformanceReview};

//! # paycast-engine
//!
//! Salary forecasting engine: trend and volatility analyzers, factor
//! blending, forecast strategies, scenario orchestration, and
//! recommendation ranking. Pure synchronous computation over values
//! handed in by the caller; no I/O and no ambient state.

pub mod analyzers;
pub mod factors;
pub mod models;
pub mod ranking;
pub mod scenario;

pub use analyzers::trend::{estimate_trend, fit, TrendLine};
pub use analyzers::volatility::{estimate_volatility, DEFAULT_VOLATILITY};
pub use factors::blender::{blend_factors, BlendedFactors, FactorData};
pub use models::{forecast, ForecastModel, PredictionResult, MIN_HISTORY_MONTHS};
pub use ranking::{rank_scenarios, RankedScenario};
pub use scenario::{Assumption, Scenario, ScenarioEngine, ScenarioSpec};

//! Scenario registry and run orchestration.

pub mod engine;
pub mod types;

pub use engine::ScenarioEngine;
pub use types::{Assumption, Scenario, ScenarioSpec};

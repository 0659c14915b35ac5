//! Scenario configuration values.

use std::fmt;

use serde::{Deserialize, Serialize};

use paycast_core::config::ModelType;

/// Optimism assumption applied when a scenario runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Assumption {
    #[default]
    Neutral,
    Optimistic,
    Pessimistic,
}

impl Assumption {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Optimistic => "optimistic",
            Self::Pessimistic => "pessimistic",
        }
    }
}

impl fmt::Display for Assumption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named forecast configuration. A pure value: it owns no computed
/// state, and the engine never mutates one after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub employee_id: String,
    pub store_id: String,
    /// Projection horizon, 1..=24 months.
    pub prediction_months: usize,
    /// Named weight profile, resolved against the registry at run time.
    pub weight_profile: String,
    pub model_type: ModelType,
    pub assumption: Assumption,
}

/// Caller-supplied fields for a new scenario. Validated at add time;
/// invalid specs are rejected and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSpec {
    /// Display name; autogenerated from the scenario counter when absent.
    #[serde(default)]
    pub name: Option<String>,
    pub employee_id: String,
    pub store_id: String,
    pub prediction_months: usize,
    #[serde(default = "default_profile_name")]
    pub weight_profile: String,
    #[serde(default)]
    pub model_type: ModelType,
    #[serde(default)]
    pub assumption: Assumption,
}

fn default_profile_name() -> String {
    "balanced".to_string()
}

impl ScenarioSpec {
    /// A spec with the default profile, model, and assumption.
    pub fn new(
        employee_id: impl Into<String>,
        store_id: impl Into<String>,
        prediction_months: usize,
    ) -> Self {
        Self {
            name: None,
            employee_id: employee_id.into(),
            store_id: store_id.into(),
            prediction_months,
            weight_profile: default_profile_name(),
            model_type: ModelType::default(),
            assumption: Assumption::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.weight_profile = profile.into();
        self
    }

    pub fn with_model(mut self, model_type: ModelType) -> Self {
        self.model_type = model_type;
        self
    }

    pub fn with_assumption(mut self, assumption: Assumption) -> Self {
        self.assumption = assumption;
        self
    }
}

//! The scenario engine: registry of named scenarios, assumption
//! adjustment, and per-scenario forecast runs.

use tracing::{debug, info};

use paycast_core::config::{ModelSettings, ProfileRegistry, WeightProfile, MAX_PREDICTION_MONTHS};
use paycast_core::errors::{RankError, ScenarioError};
use paycast_core::types::collections::FxHashMap;
use paycast_core::types::HistoricalSalaryRecord;

use super::types::{Assumption, Scenario, ScenarioSpec};
use crate::factors::FactorData;
use crate::models::{build_model, PredictionResult};
use crate::ranking::{rank_scenarios, RankedScenario};

/// Confidence boost under the optimistic assumption.
const OPTIMISTIC_CONFIDENCE_BOOST: f64 = 0.10;
/// Confidence ceiling under the optimistic assumption.
const OPTIMISTIC_CONFIDENCE_CAP: f64 = 0.99;
/// Scale applied to performance and tenure weights when optimistic.
const OPTIMISTIC_WEIGHT_SCALE: f64 = 1.2;
/// Ceiling on a scaled-up weight.
const OPTIMISTIC_WEIGHT_CAP: f64 = 0.8;

/// Confidence cut under the pessimistic assumption.
const PESSIMISTIC_CONFIDENCE_CUT: f64 = 0.15;
/// Confidence floor under the pessimistic assumption.
const PESSIMISTIC_CONFIDENCE_FLOOR: f64 = 0.6;
/// Scale applied to the performance weight when pessimistic.
const PESSIMISTIC_PERFORMANCE_SCALE: f64 = 0.8;
/// Floor on the scaled-down performance weight.
const PESSIMISTIC_PERFORMANCE_FLOOR: f64 = 0.1;
/// Scale applied to the seasonal weight when pessimistic.
const PESSIMISTIC_SEASONAL_SCALE: f64 = 0.5;
/// Floor on the scaled-down seasonal weight.
const PESSIMISTIC_SEASONAL_FLOOR: f64 = 0.05;

/// Registry of scenarios and their computed results.
///
/// Each run is an independent, idempotent read-modify-write of one
/// result-map entry: re-running a scenario replaces only its own stored
/// result and never touches another's.
pub struct ScenarioEngine {
    profiles: ProfileRegistry,
    settings: ModelSettings,
    scenarios: FxHashMap<String, Scenario>,
    results: FxHashMap<String, PredictionResult>,
    counter: u64,
}

impl ScenarioEngine {
    pub fn new(profiles: ProfileRegistry, settings: ModelSettings) -> Self {
        Self {
            profiles,
            settings,
            scenarios: FxHashMap::default(),
            results: FxHashMap::default(),
            counter: 0,
        }
    }

    /// An engine with the canonical profiles and default model settings.
    pub fn with_defaults() -> Self {
        Self::new(ProfileRegistry::new(), ModelSettings::default())
    }

    /// Validate and register a scenario, returning its fresh id.
    /// No forecast is computed yet.
    pub fn add_scenario(&mut self, spec: ScenarioSpec) -> Result<String, ScenarioError> {
        if spec.employee_id.trim().is_empty() {
            return Err(ScenarioError::MissingEmployee);
        }
        if spec.store_id.trim().is_empty() {
            return Err(ScenarioError::MissingStore);
        }
        if spec.prediction_months == 0 || spec.prediction_months > MAX_PREDICTION_MONTHS {
            return Err(ScenarioError::MonthsOutOfRange(spec.prediction_months));
        }

        self.counter += 1;
        let id = format!("scenario-{}", self.counter);
        let scenario = Scenario {
            id: id.clone(),
            name: spec
                .name
                .unwrap_or_else(|| format!("Scenario {}", self.counter)),
            employee_id: spec.employee_id,
            store_id: spec.store_id,
            prediction_months: spec.prediction_months,
            weight_profile: spec.weight_profile,
            model_type: spec.model_type,
            assumption: spec.assumption,
        };
        debug!(scenario = %id, model = %scenario.model_type, "scenario added");
        self.scenarios.insert(id.clone(), scenario);
        Ok(id)
    }

    /// Drop a scenario and its stored result. Unknown ids are a no-op.
    pub fn remove_scenario(&mut self, id: &str) {
        self.scenarios.remove(id);
        self.results.remove(id);
    }

    pub fn scenario(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.get(id)
    }

    pub fn scenario_count(&self) -> usize {
        self.scenarios.len()
    }

    /// The stored result for a scenario, if it has been run.
    pub fn result(&self, id: &str) -> Option<&PredictionResult> {
        self.results.get(id)
    }

    /// All computed results keyed by scenario id.
    pub fn list_results(&self) -> &FxHashMap<String, PredictionResult> {
        &self.results
    }

    /// Run one scenario against the supplied data and store its result.
    ///
    /// The scenario's assumption adjusts a copy of the resolved weight
    /// profile and confidence level; the stored scenario itself is
    /// untouched. Re-running replaces the prior result for this id only.
    pub fn run_scenario(
        &mut self,
        id: &str,
        history: &[HistoricalSalaryRecord],
        factors: &FactorData<'_>,
    ) -> Result<PredictionResult, ScenarioError> {
        let scenario = self
            .scenarios
            .get(id)
            .ok_or_else(|| ScenarioError::UnknownScenario(id.to_string()))?;

        let profile = self.profiles.resolve(&scenario.weight_profile);
        let confidence = self.settings.confidence_level(scenario.model_type);
        let (profile, confidence) = apply_assumption(scenario.assumption, profile, confidence);

        let mut settings = self.settings.clone();
        settings.set_confidence_level(scenario.model_type, confidence);
        let model = build_model(scenario.model_type, &settings);

        let result = model.predict(history, factors, profile, scenario.prediction_months)?;
        info!(
            scenario = %id,
            model = %scenario.model_type,
            assumption = %scenario.assumption,
            months = scenario.prediction_months,
            "scenario forecast complete"
        );
        self.results.insert(id.to_string(), result.clone());
        Ok(result)
    }

    /// Rank every computed result and stamp recommendation scores onto
    /// the stored results. Needs at least two computed results.
    ///
    /// Ranking is recomputed in full from the current result set, never
    /// patched incrementally.
    pub fn rank(&mut self) -> Result<Vec<RankedScenario>, RankError> {
        let ranked = rank_scenarios(&self.results)?;
        for entry in &ranked {
            if let Some(result) = self.results.get_mut(&entry.id) {
                result.recommendation_score = Some(entry.recommendation_score);
            }
        }
        Ok(ranked)
    }
}

/// Adjust a resolved weight profile and confidence level for the
/// scenario's assumption. Neutral passes both through untouched.
fn apply_assumption(
    assumption: Assumption,
    mut profile: WeightProfile,
    mut confidence: f64,
) -> (WeightProfile, f64) {
    match assumption {
        Assumption::Neutral => {}
        Assumption::Optimistic => {
            confidence = (confidence + OPTIMISTIC_CONFIDENCE_BOOST).min(OPTIMISTIC_CONFIDENCE_CAP);
            profile.performance =
                (profile.performance * OPTIMISTIC_WEIGHT_SCALE).min(OPTIMISTIC_WEIGHT_CAP);
            profile.tenure = (profile.tenure * OPTIMISTIC_WEIGHT_SCALE).min(OPTIMISTIC_WEIGHT_CAP);
        }
        Assumption::Pessimistic => {
            confidence =
                (confidence - PESSIMISTIC_CONFIDENCE_CUT).max(PESSIMISTIC_CONFIDENCE_FLOOR);
            profile.performance = (profile.performance * PESSIMISTIC_PERFORMANCE_SCALE)
                .max(PESSIMISTIC_PERFORMANCE_FLOOR);
            profile.seasonal =
                (profile.seasonal * PESSIMISTIC_SEASONAL_SCALE).max(PESSIMISTIC_SEASONAL_FLOOR);
        }
    }
    (profile, confidence)
}

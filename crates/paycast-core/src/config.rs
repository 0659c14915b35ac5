//! Model configuration and named weight profiles.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::collections::FxHashMap;

/// Heuristic confidence level every strategy starts from. Controls the
/// displayed width of the uncertainty band, not statistical coverage.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.85;

/// Upper bound on the projection horizon, in months.
pub const MAX_PREDICTION_MONTHS: usize = 24;

/// Relative importance of the four blended growth signals.
///
/// Weights scale independent contributions; they are not required to
/// sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightProfile {
    pub attendance: f64,
    pub performance: f64,
    pub seasonal: f64,
    pub tenure: f64,
}

impl WeightProfile {
    pub const fn new(attendance: f64, performance: f64, seasonal: f64, tenure: f64) -> Self {
        Self {
            attendance,
            performance,
            seasonal,
            tenure,
        }
    }

    /// Even spread across all four signals.
    pub const BALANCED: Self = Self::new(0.25, 0.30, 0.15, 0.30);
    /// Attendance-dominant weighting.
    pub const ATTENDANCE: Self = Self::new(0.60, 0.20, 0.10, 0.10);
    /// Performance-dominant weighting.
    pub const PERFORMANCE: Self = Self::new(0.20, 0.60, 0.10, 0.10);
    /// Seniority-dominant weighting.
    pub const TENURE: Self = Self::new(0.10, 0.20, 0.10, 0.60);
}

impl Default for WeightProfile {
    fn default() -> Self {
        Self::BALANCED
    }
}

/// Named weight-profile registry with the four canonical profiles
/// preinstalled.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: FxHashMap<String, WeightProfile>,
}

impl ProfileRegistry {
    /// Create a registry holding `balanced`, `attendance`, `performance`,
    /// and `tenure`.
    pub fn new() -> Self {
        let mut profiles = FxHashMap::default();
        profiles.insert("balanced".to_string(), WeightProfile::BALANCED);
        profiles.insert("attendance".to_string(), WeightProfile::ATTENDANCE);
        profiles.insert("performance".to_string(), WeightProfile::PERFORMANCE);
        profiles.insert("tenure".to_string(), WeightProfile::TENURE);
        Self { profiles }
    }

    /// Register or replace a named profile.
    pub fn insert(&mut self, name: impl Into<String>, profile: WeightProfile) {
        self.profiles.insert(name.into(), profile);
    }

    pub fn get(&self, name: &str) -> Option<&WeightProfile> {
        self.profiles.get(name)
    }

    /// Resolve a profile by name, falling back to `balanced`.
    pub fn resolve(&self, name: &str) -> WeightProfile {
        self.get(name).copied().unwrap_or(WeightProfile::BALANCED)
    }

    /// Merge profiles from a TOML document with `[profiles.<name>]` tables.
    pub fn load_toml(&mut self, toml_str: &str) -> Result<(), toml::de::Error> {
        #[derive(Deserialize)]
        struct ProfileFile {
            #[serde(default)]
            profiles: FxHashMap<String, WeightProfile>,
        }

        let parsed: ProfileFile = toml::from_str(toml_str)?;
        self.profiles.extend(parsed.profiles);
        Ok(())
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Forecast strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    /// Least-squares trend with weighted factor adjustment.
    #[default]
    Linear,
    /// Trend plus detected periodic indices.
    Seasonal,
    /// Weighted window over the most recent records.
    MovingAverage,
}

impl ModelType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Seasonal => "seasonal",
            Self::MovingAverage => "moving_average",
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for the linear-regression strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearModelConfig {
    pub confidence_level: f64,
    /// When off, growth is trend-only and factor multipliers are skipped.
    pub use_weighted_factors: bool,
    /// Upper bound of the uniform overtime jitter term. 0 disables jitter.
    pub jitter_max: f64,
    /// Seed for the jitter RNG. Identical seeds reproduce identical runs.
    pub jitter_seed: u64,
}

impl Default for LinearModelConfig {
    fn default() -> Self {
        Self {
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            use_weighted_factors: true,
            jitter_max: 0.05,
            jitter_seed: 0,
        }
    }
}

/// Configuration for the seasonal-adjustment strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonalModelConfig {
    pub confidence_level: f64,
    /// Period length in months (3, 4, 6, or 12).
    pub seasonal_period: usize,
    /// Multiplier on the detected seasonal deviation, 0..=2.
    pub seasonal_strength: f64,
}

impl Default for SeasonalModelConfig {
    fn default() -> Self {
        Self {
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            seasonal_period: 12,
            seasonal_strength: 1.0,
        }
    }
}

/// Configuration for the weighted moving-average strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovingAverageModelConfig {
    pub confidence_level: f64,
    /// Number of trailing months averaged (2, 3, 4, or 6).
    pub window_size: usize,
    /// Per-month weights, newest first. Regenerated as a descending
    /// triangular profile when the length does not match `window_size`.
    pub weights: Vec<f64>,
}

impl Default for MovingAverageModelConfig {
    fn default() -> Self {
        Self {
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            window_size: 3,
            weights: vec![0.5, 0.3, 0.2],
        }
    }
}

/// The per-engine settings table, one entry per strategy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    pub linear: LinearModelConfig,
    pub seasonal: SeasonalModelConfig,
    pub moving_average: MovingAverageModelConfig,
}

impl ModelSettings {
    /// Confidence level configured for the given strategy.
    pub fn confidence_level(&self, model_type: ModelType) -> f64 {
        match model_type {
            ModelType::Linear => self.linear.confidence_level,
            ModelType::Seasonal => self.seasonal.confidence_level,
            ModelType::MovingAverage => self.moving_average.confidence_level,
        }
    }

    /// Override the confidence level for the given strategy.
    pub fn set_confidence_level(&mut self, model_type: ModelType, level: f64) {
        match model_type {
            ModelType::Linear => self.linear.confidence_level = level,
            ModelType::Seasonal => self.seasonal.confidence_level = level,
            ModelType::MovingAverage => self.moving_average.confidence_level = level,
        }
    }
}

//! Key-factor reporting types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The signal a key factor refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    Performance,
    Attendance,
    Tenure,
    Seasonal,
    /// Long-run salary trend, reported when no weighted signal clears
    /// the floor.
    Trend,
    /// Recent salary pattern (moving-average strategy).
    RecentPattern,
}

impl FactorKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Performance => "performance",
            Self::Attendance => "attendance",
            Self::Tenure => "tenure",
            Self::Seasonal => "seasonal",
            Self::Trend => "trend",
            Self::RecentPattern => "recent_pattern",
        }
    }
}

impl fmt::Display for FactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Qualitative size of a factor's weighted contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    /// Tier by weighted contribution magnitude: > 0.05 is high,
    /// > 0.02 medium, anything else low.
    pub fn from_weighted(weighted: f64) -> Self {
        let magnitude = weighted.abs();
        if magnitude > 0.05 {
            Self::High
        } else if magnitude > 0.02 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// A ranked contributor to a forecast's growth expectation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyFactor {
    pub kind: FactorKind,
    /// Raw factor value before weighting.
    pub value: f64,
    /// Weight applied to the factor.
    pub weight: f64,
    /// `value * weight` — the ranking key.
    pub weighted_value: f64,
    pub impact: Impact,
}

impl KeyFactor {
    pub fn new(kind: FactorKind, value: f64, weight: f64) -> Self {
        let weighted_value = value * weight;
        Self {
            kind,
            value,
            weight,
            weighted_value,
            impact: Impact::from_weighted(weighted_value),
        }
    }
}

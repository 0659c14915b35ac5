//! Factor blending: combine performance, attendance, tenure, and
//! seasonal signals into a single growth adjustment.

pub mod blender;
pub mod correlation;
pub mod types;

pub use blender::{blend_factors, key_factors, BlendedFactors, FactorData};
pub use correlation::{correlate, CorrelationPoint};
pub use types::{FactorKind, Impact, KeyFactor};

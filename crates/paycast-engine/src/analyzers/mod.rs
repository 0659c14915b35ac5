//! Leaf analyzers over numeric series: trend, volatility, seasonality.

pub mod seasonal;
pub mod trend;
pub mod volatility;

pub use seasonal::{detect_seasonality, seasonal_bump, SeasonalityProfile};
pub use trend::{estimate_trend, fit, TrendLine};
pub use volatility::{estimate_volatility, DEFAULT_VOLATILITY};

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Tolerance, in months, within which a weekly tick is labelled as a whole month.
pub const DEFAULT_SNAP_TOLERANCE_MONTHS: f64 = 0.08;

/// Configuration for the planner.
///
/// Missing fields in JSON fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Weekly ticks within this many months of a whole month get a month label.
    pub boundary_snap_tolerance_months: f64,

    /// Whether charts carry the compounding comparison curve.
    pub include_benchmark: bool,

    /// Base URL of the strategy API (e.g., "https://api.varntix.com/v1").
    /// When unset, no HTTP provider is registered.
    pub api_base_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            boundary_snap_tolerance_months: DEFAULT_SNAP_TOLERANCE_MONTHS,
            include_benchmark: true,
            api_base_url: None,
        }
    }
}

impl Settings {
    /// Load settings from JSON, validating the tolerance.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        let tol = self.boundary_snap_tolerance_months;
        if !tol.is_finite() || !(0.0..0.5).contains(&tol) {
            return Err(CoreError::ValidationError(format!(
                "boundary_snap_tolerance_months must be in [0, 0.5), got {tol}"
            )));
        }
        Ok(())
    }
}

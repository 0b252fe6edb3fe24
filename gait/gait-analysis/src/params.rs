//! Configuration of a whole trial analysis.

use gait_cycles::CycleParams;
use gait_events::EventParams;
use gait_force::ForceParams;
use gait_spatiotemporal::SpatiotemporalParams;
use gait_types::{GaitError, GaitResult};
use serde::{Deserialize, Serialize};

/// Parameters of every pipeline stage.
///
/// Any section left out of a configuration file takes its defaults.
///
/// # Example
///
/// ```
/// use gait_analysis::AnalysisParams;
///
/// let params = AnalysisParams::from_json(r#"{ "force": { "threshold": 25.0 } }"#).unwrap();
/// assert!((params.force.threshold - 25.0).abs() < 1e-12);
/// assert_eq!(params.cycles.points, 101);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisParams {
    /// Event detection and phase classification.
    pub events: EventParams,
    /// Stride segmentation and resampling.
    pub cycles: CycleParams,
    /// Spatiotemporal and global metrics.
    pub spatiotemporal: SpatiotemporalParams,
    /// Force-plate synchronization.
    pub force: ForceParams,
}

impl AnalysisParams {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GaitError::InvalidParams`] for malformed JSON or invalid values.
    pub fn from_json(text: &str) -> GaitResult<Self> {
        let params: Self = serde_json::from_str(text).map_err(|e| GaitError::invalid_params(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    /// Checks every section.
    ///
    /// # Errors
    ///
    /// Returns [`GaitError::InvalidParams`] naming the first invalid value.
    pub fn validate(&self) -> GaitResult<()> {
        let prominence = self.events.min_prominence;
        if !prominence.is_finite() || prominence < 0.0 {
            return Err(GaitError::invalid_params(format!(
                "minimum prominence must be non-negative, got {prominence}"
            )));
        }
        self.cycles.validate()?;
        let unit = self.spatiotemporal.metres_per_unit;
        if !unit.is_finite() || unit <= 0.0 {
            return Err(GaitError::invalid_params(format!(
                "metres per unit must be positive, got {unit}"
            )));
        }
        self.force
            .validate()
            .map_err(|e| GaitError::invalid_params(e.to_string()))
    }
}

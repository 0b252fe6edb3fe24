//! Parameters for stride normalisation and kinematic summaries.

use gait_types::{CYCLE_POINTS, GaitError, GaitResult};
use serde::{Deserialize, Serialize};

use crate::resample::ResampleMethod;

/// Parameters for cycle segmentation and aggregation.
///
/// # Example
///
/// ```
/// use gait_cycles::{CycleParams, ResampleMethod};
///
/// let params = CycleParams::linear();
/// assert_eq!(params.method, ResampleMethod::Linear);
/// assert_eq!(params.points, 101);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleParams {
    /// Resampling method for stride windows.
    pub method: ResampleMethod,

    /// Samples per normalised cycle.
    pub points: usize,

    /// Decimal digits kept for per-cycle kinematic parameters.
    pub decimals: u32,
}

impl Default for CycleParams {
    fn default() -> Self {
        Self {
            method: ResampleMethod::Fourier,
            points: CYCLE_POINTS,
            decimals: 2,
        }
    }
}

impl CycleParams {
    /// Parameters using linear resampling.
    #[must_use]
    pub fn linear() -> Self {
        Self::default().method(ResampleMethod::Linear)
    }

    /// Set the resampling method.
    #[must_use]
    pub const fn method(mut self, method: ResampleMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the number of samples per cycle.
    #[must_use]
    pub const fn points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }

    /// Checks that a cycle has at least two samples.
    ///
    /// # Errors
    ///
    /// Returns [`GaitError::InvalidParams`] otherwise.
    pub fn validate(&self) -> GaitResult<()> {
        if self.points < 2 {
            return Err(GaitError::invalid_params(format!(
                "cycle points must be at least 2, got {}",
                self.points
            )));
        }
        Ok(())
    }
}

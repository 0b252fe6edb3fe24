//! Parameters for force-plate synchronization.

use gait_types::CYCLE_POINTS;
use serde::{Deserialize, Serialize};

use crate::error::{ForceError, ForceResult};

/// Criterion marking the first sample of foot contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactOnset {
    /// First sample with positive vertical force after thresholding.
    #[default]
    FirstLoaded,

    /// First sample with vertical force strictly above the threshold.
    AboveThreshold,
}

/// Parameters for force-plate synchronization.
///
/// # Example
///
/// ```
/// use gait_force::{ContactOnset, ForceParams};
///
/// let params = ForceParams::default()
///     .threshold(30.0)
///     .onset(ContactOnset::AboveThreshold);
/// assert!(params.validate().is_ok());
/// assert_eq!(params.min_samples, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForceParams {
    /// Vertical force below which a sample counts as unloaded, in Newtons.
    pub threshold: f64,

    /// Sample rate assumed when the recording header has none, in Hz.
    pub default_rate_hz: f64,

    /// Minimum samples in a stance window after its start is shifted.
    pub min_samples: usize,

    /// Contact onset criterion.
    pub onset: ContactOnset,

    /// Samples in the resampled stance cycle.
    pub points: usize,
}

impl Default for ForceParams {
    fn default() -> Self {
        Self {
            threshold: 20.0,
            default_rate_hz: 1000.0,
            min_samples: 10,
            onset: ContactOnset::FirstLoaded,
            points: CYCLE_POINTS,
        }
    }
}

impl ForceParams {
    /// Set the contact threshold.
    #[must_use]
    pub const fn threshold(mut self, newtons: f64) -> Self {
        self.threshold = newtons;
        self
    }

    /// Set the fallback sample rate.
    #[must_use]
    pub const fn default_rate_hz(mut self, hz: f64) -> Self {
        self.default_rate_hz = hz;
        self
    }

    /// Set the minimum window length.
    #[must_use]
    pub const fn min_samples(mut self, samples: usize) -> Self {
        self.min_samples = samples;
        self
    }

    /// Set the contact onset criterion.
    #[must_use]
    pub const fn onset(mut self, onset: ContactOnset) -> Self {
        self.onset = onset;
        self
    }

    /// Checks the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ForceError::InvalidParams`] for a negative or non-finite
    /// threshold, a non-positive fallback rate, or fewer than two samples
    /// per window or cycle.
    pub fn validate(&self) -> ForceResult<()> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(ForceError::invalid_params(format!(
                "threshold must be non-negative, got {}",
                self.threshold
            )));
        }
        if !self.default_rate_hz.is_finite() || self.default_rate_hz <= 0.0 {
            return Err(ForceError::invalid_params(format!(
                "default rate must be positive, got {}",
                self.default_rate_hz
            )));
        }
        if self.min_samples < 2 || self.points < 2 {
            return Err(ForceError::invalid_params(
                "windows and cycles need at least 2 samples",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = ForceParams::default();
        assert!((params.threshold - 20.0).abs() < f64::EPSILON);
        assert!((params.default_rate_hz - 1000.0).abs() < f64::EPSILON);
        assert_eq!(params.onset, ContactOnset::FirstLoaded);
        assert_eq!(params.points, CYCLE_POINTS);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(ForceParams::default().threshold(-1.0).validate().is_err());
        assert!(ForceParams::default().default_rate_hz(0.0).validate().is_err());
        assert!(ForceParams::default().min_samples(1).validate().is_err());
    }
}

//! Mapping between camera frames and force-plate samples.

use serde::{Deserialize, Serialize};

use crate::error::{ForceError, ForceResult};

/// Linear map between the camera clock and the force-plate clock.
///
/// Both clocks start together; a camera frame maps to the nearest force
/// sample and back.
///
/// # Example
///
/// ```
/// use gait_force::ClockMap;
///
/// let clock = ClockMap::new(1000.0, 100.0).unwrap();
/// assert_eq!(clock.to_sample(75), 750);
/// assert_eq!(clock.to_frame(755), 76);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClockMap {
    /// Force-plate samples per second.
    pub force_hz: f64,
    /// Camera frames per second.
    pub camera_hz: f64,
}

impl ClockMap {
    /// Creates a clock map.
    ///
    /// # Errors
    ///
    /// Returns [`ForceError::InvalidRate`] if either rate is not a positive
    /// finite number.
    pub fn new(force_hz: f64, camera_hz: f64) -> ForceResult<Self> {
        for (clock, hz) in [("force", force_hz), ("camera", camera_hz)] {
            if !hz.is_finite() || hz <= 0.0 {
                return Err(ForceError::invalid_rate(clock, hz));
            }
        }
        Ok(Self { force_hz, camera_hz })
    }

    /// Force samples per camera frame.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.force_hz / self.camera_hz
    }

    /// Nearest force sample of a camera frame.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn to_sample(&self, frame: usize) -> usize {
        (frame as f64 * self.ratio()).round() as usize
    }

    /// Nearest camera frame of a force sample.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn to_frame(&self, sample: usize) -> usize {
        (sample as f64 / self.ratio()).round() as usize
    }
}

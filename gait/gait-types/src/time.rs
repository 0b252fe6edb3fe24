//! Motion-capture frame timing.

use crate::error::{GaitError, GaitResult};

/// Per-frame timestamps of the motion-capture clock, in seconds.
///
/// Shares its frame index with trajectories and angle signals.
///
/// # Example
///
/// ```
/// use gait_types::FrameTimes;
///
/// let times = FrameTimes::uniform(100.0, 501);
/// assert!((times.duration() - 5.0).abs() < 1e-9);
/// assert!((times.frame_rate().unwrap() - 100.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameTimes {
    seconds: Vec<f64>,
}

impl FrameTimes {
    /// Creates frame times from per-frame timestamps in seconds.
    #[must_use]
    pub const fn new(seconds: Vec<f64>) -> Self {
        Self { seconds }
    }

    /// Evenly spaced timestamps starting at zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn uniform(rate_hz: f64, frames: usize) -> Self {
        Self {
            seconds: (0..frames).map(|i| i as f64 / rate_hz).collect(),
        }
    }

    /// Timestamps in seconds.
    #[must_use]
    pub fn seconds(&self) -> &[f64] {
        &self.seconds
    }

    /// Number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seconds.len()
    }

    /// Returns true if there are no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seconds.is_empty()
    }

    /// Timestamp of `frame`.
    #[must_use]
    pub fn at(&self, frame: usize) -> Option<f64> {
        self.seconds.get(frame).copied()
    }

    /// Time between the first and last frame (0 with fewer than two frames).
    #[must_use]
    pub fn duration(&self) -> f64 {
        match (self.seconds.first(), self.seconds.last()) {
            (Some(first), Some(last)) if self.seconds.len() > 1 => last - first,
            _ => 0.0,
        }
    }

    /// Camera frame rate derived from the mean timestamp spacing.
    ///
    /// Returns `None` with fewer than two frames or a non-positive duration.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn frame_rate(&self) -> Option<f64> {
        let duration = self.duration();
        if self.seconds.len() < 2 || duration <= 0.0 || !duration.is_finite() {
            return None;
        }
        Some((self.seconds.len() - 1) as f64 / duration)
    }

    /// Checks that there is one timestamp per frame.
    ///
    /// # Errors
    ///
    /// Returns [`GaitError::LengthMismatch`] if the count differs from `frames`.
    pub fn validate(&self, frames: usize) -> GaitResult<()> {
        if self.seconds.len() == frames {
            Ok(())
        } else {
            Err(GaitError::length_mismatch(
                "timestamps",
                frames,
                self.seconds.len(),
            ))
        }
    }
}

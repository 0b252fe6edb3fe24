//! Stance windows and their normalised force cycles.

use gait_cycles::resample_linear;
use gait_types::{ForceSample, SampleRate, Side};
use serde::{Deserialize, Serialize};

use crate::clock::ClockMap;
use crate::error::{ForceError, ForceResult};
use crate::params::ForceParams;

/// Force-sample bounds of one accepted stance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StanceWindow {
    /// First loaded sample.
    pub start: usize,
    /// Sample of the closing heel-strike (exclusive), clipped to the recording.
    pub end: usize,
    /// Sample of the toe-off.
    pub toe_off: usize,
}

impl StanceWindow {
    /// Number of samples.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the window holds no samples.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Toe-off position in percent of the window, clamped to `[0, 100]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn toe_off_percent(&self) -> f64 {
        let span = self.len().saturating_sub(1);
        if span == 0 {
            return 0.0;
        }
        let offset = self.toe_off as f64 - self.start as f64;
        (offset / span as f64 * 100.0).clamp(0.0, 100.0)
    }
}

/// Maps one stride to force samples and validates its loading.
///
/// `fz` is the thresholded vertical force. The stride `[start, end)` and its
/// toe-off are camera frames.
///
/// # Errors
///
/// Returns [`ForceError::WindowRejected`] when the window lies outside the
/// recording, its peak force stays below the threshold, or fewer than
/// `min_samples` remain once the start is moved to the first loaded sample.
pub fn stance_window(
    fz: &[f64],
    clock: &ClockMap,
    stride: (usize, usize),
    toe_off: usize,
    params: &ForceParams,
) -> ForceResult<StanceWindow> {
    let (first, last) = stride;
    let reject = |reason: &str| ForceError::window_rejected(first, last, reason);

    let begin = clock.to_sample(first);
    let end = clock.to_sample(last).min(fz.len());
    if begin >= end {
        return Err(reject("outside the force recording"));
    }

    let window = &fz[begin..end];
    let peak = window.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if peak < params.threshold {
        return Err(reject("peak vertical force below contact threshold"));
    }

    let shift = window
        .iter()
        .position(|&f| f >= params.threshold)
        .ok_or_else(|| reject("no sample reaches the contact threshold"))?;
    let start = begin + shift;
    if end - start < params.min_samples {
        return Err(reject("too few loaded samples"));
    }

    Ok(StanceWindow {
        start,
        end,
        toe_off: clock.to_sample(toe_off),
    })
}

/// One stance of ground-reaction force normalised to a percent grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForceCycle {
    /// Side in contact with the plate.
    pub side: Side,
    /// Force-sample bounds of the stance.
    pub window: StanceWindow,
    /// Force-plate sample rate and where it came from.
    pub sample_rate: SampleRate,
    /// Camera frame rate used for the mapping.
    pub camera_rate_hz: f64,
    /// Vertical force.
    pub fz: Vec<f64>,
    /// Medio-lateral force.
    pub fx: Vec<f64>,
    /// Antero-posterior force.
    pub fy: Vec<f64>,
    /// Centre of pressure, plate x.
    pub cop_x: Vec<f64>,
    /// Centre of pressure, plate y.
    pub cop_y: Vec<f64>,
    /// Toe-off in percent of stance.
    pub toe_off_percent: f64,
}

impl ForceCycle {
    /// Resamples every channel of `window` to `points` samples.
    ///
    /// `samples` are the thresholded force-plate samples.
    #[must_use]
    pub fn extract(
        samples: &[ForceSample],
        window: StanceWindow,
        side: Side,
        clock: &ClockMap,
        sample_rate: SampleRate,
        points: usize,
    ) -> Self {
        let stance = samples.get(window.start..window.end).unwrap_or_default();
        let channel = |f: fn(&ForceSample) -> f64| {
            let series: Vec<f64> = stance.iter().map(f).collect();
            resample_linear(&series, points)
        };
        Self {
            side,
            window,
            sample_rate,
            camera_rate_hz: clock.camera_hz,
            fz: channel(ForceSample::fz),
            fx: channel(ForceSample::fx),
            fy: channel(ForceSample::fy),
            cop_x: channel(|s| s.cop[0]),
            cop_y: channel(|s| s.cop[1]),
            toe_off_percent: window.toe_off_percent(),
        }
    }

    /// Number of normalised samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fz.len()
    }

    /// Returns true if the cycle has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fz.is_empty()
    }
}

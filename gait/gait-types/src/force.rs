//! Force-plate sample types.
//!
//! A force plate runs on its own clock, independent of the motion-capture
//! camera. Its samples carry the ground-reaction force and the centre of
//! pressure (COP) on the plate surface.

use serde::{Deserialize, Serialize};

/// One force-plate sample.
///
/// # Units
///
/// - Force: Newtons (N), `[Fx, Fy, Fz]` with `Fz` vertical
/// - Centre of pressure: plate coordinates, `[COPx, COPy]`
///
/// # Example
///
/// ```
/// use gait_types::ForceSample;
///
/// let sample = ForceSample::new([3.0, 4.0, 700.0], [0.1, 0.2]);
/// assert!((sample.fz() - 700.0).abs() < 1e-12);
/// assert!(sample.is_loaded(20.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ForceSample {
    /// Force vector `[Fx, Fy, Fz]`.
    pub force: [f64; 3],
    /// Centre of pressure `[COPx, COPy]`.
    pub cop: [f64; 2],
}

impl ForceSample {
    /// Creates a sample.
    #[must_use]
    pub const fn new(force: [f64; 3], cop: [f64; 2]) -> Self {
        Self { force, cop }
    }

    /// Medio-lateral force.
    #[must_use]
    pub const fn fx(&self) -> f64 {
        self.force[0]
    }

    /// Antero-posterior force.
    #[must_use]
    pub const fn fy(&self) -> f64 {
        self.force[1]
    }

    /// Vertical force.
    #[must_use]
    pub const fn fz(&self) -> f64 {
        self.force[2]
    }

    /// Returns true if the vertical force reaches `threshold`.
    #[must_use]
    pub fn is_loaded(&self, threshold: f64) -> bool {
        self.fz() >= threshold
    }
}

/// Where a force-plate sample rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    /// Read from the recording's header metadata.
    Header,
    /// Header metadata was missing or invalid; the configured default was used.
    Default,
}

/// A resolved sample rate and its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRate {
    /// Samples per second.
    pub hz: f64,
    /// Provenance of `hz`.
    pub source: RateSource,
}

/// A complete force-plate recording.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForceRecording {
    /// Sample rate announced by the recording header, if any.
    pub header_rate: Option<f64>,
    /// Samples in acquisition order.
    pub samples: Vec<ForceSample>,
}

impl ForceRecording {
    /// Creates a recording.
    #[must_use]
    pub const fn new(header_rate: Option<f64>, samples: Vec<ForceSample>) -> Self {
        Self {
            header_rate,
            samples,
        }
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the recording has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Resolves the sample rate, falling back to `default_hz` when the header
    /// rate is missing, non-finite or not positive.
    ///
    /// # Example
    ///
    /// ```
    /// use gait_types::{ForceRecording, RateSource};
    ///
    /// let rate = ForceRecording::new(None, Vec::new()).sample_rate(1000.0);
    /// assert_eq!(rate.source, RateSource::Default);
    /// assert!((rate.hz - 1000.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn sample_rate(&self, default_hz: f64) -> SampleRate {
        match self.header_rate {
            Some(hz) if hz.is_finite() && hz > 0.0 => SampleRate {
                hz,
                source: RateSource::Header,
            },
            _ => SampleRate {
                hz: default_hz,
                source: RateSource::Default,
            },
        }
    }
}

//! Segment rotation signals.

use crate::error::{GaitError, GaitResult};
use crate::model::BiomechanicalModel;
use crate::side::{Plane, Segment, Side, SideMap};

/// A per-segment rotation time series with one `[sagittal, frontal, transverse]`
/// sample per motion-capture frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AngleSignal {
    samples: Vec<[f64; 3]>,
}

impl AngleSignal {
    /// Creates a signal from its per-frame samples.
    #[must_use]
    pub const fn new(samples: Vec<[f64; 3]>) -> Self {
        Self { samples }
    }

    /// Per-frame samples.
    #[must_use]
    pub fn samples(&self) -> &[[f64; 3]] {
        &self.samples
    }

    /// Number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the signal has no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The frames in `[start, end)`, clipped to the signal length.
    #[must_use]
    pub fn window(&self, start: usize, end: usize) -> &[[f64; 3]] {
        let end = end.min(self.samples.len());
        let start = start.min(end);
        &self.samples[start..end]
    }

    /// One plane of the signal as a plain series.
    #[must_use]
    pub fn plane(&self, plane: Plane) -> Vec<f64> {
        let i = plane.index();
        self.samples.iter().map(|s| s[i]).collect()
    }

    /// Keeps the samples at `frames`, in order. Indices past the end are
    /// skipped, so a short signal stays short.
    #[must_use]
    pub fn select(&self, frames: &[usize]) -> Self {
        Self {
            samples: frames
                .iter()
                .filter_map(|&f| self.samples.get(f).copied())
                .collect(),
        }
    }

    /// Returns the signal multiplied component-wise by `factors`.
    #[must_use]
    pub fn scaled(&self, factors: [f64; 3]) -> Self {
        Self {
            samples: self
                .samples
                .iter()
                .map(|s| [s[0] * factors[0], s[1] * factors[1], s[2] * factors[2]])
                .collect(),
        }
    }
}

/// Rotation signals of the thigh, shank and foot on both sides.
///
/// # Example
///
/// ```
/// use gait_types::{AngleSet, AngleSignal, Segment, Side};
///
/// let mut set = AngleSet::default();
/// set.insert(Side::Right, Segment::Shank, AngleSignal::new(vec![[10.0, 0.0, 0.0]]));
/// assert_eq!(set.get(Side::Right, Segment::Shank).len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AngleSet {
    segments: SideMap<[AngleSignal; 3]>,
}

impl AngleSet {
    /// Returns the signal of `segment` on `side`.
    #[must_use]
    pub fn get(&self, side: Side, segment: Segment) -> &AngleSignal {
        &self.segments[side][segment_slot(segment)]
    }

    /// Stores the signal of `segment` on `side`, replacing any previous one.
    pub fn insert(&mut self, side: Side, segment: Segment, signal: AngleSignal) {
        self.segments[side][segment_slot(segment)] = signal;
    }

    /// Applies the sign-correction vectors of `model` to every segment.
    #[must_use]
    pub fn corrected(&self, model: &BiomechanicalModel) -> Self {
        let mut out = Self::default();
        for side in Side::BOTH {
            for segment in Segment::ALL {
                let factors = model.correction(side, segment);
                out.insert(side, segment, self.get(side, segment).scaled(factors));
            }
        }
        out
    }

    /// Keeps the frames at `frames` in every segment.
    ///
    /// Used to follow marker rows dropped for missing values.
    #[must_use]
    pub fn select_frames(&self, frames: &[usize]) -> Self {
        let mut out = Self::default();
        for side in Side::BOTH {
            for segment in Segment::ALL {
                out.insert(side, segment, self.get(side, segment).select(frames));
            }
        }
        out
    }

    /// Checks that all six signals are present and have `frames` samples.
    ///
    /// # Errors
    ///
    /// Returns [`GaitError::MissingSegment`] for an empty signal and
    /// [`GaitError::LengthMismatch`] for a signal of the wrong length.
    pub fn validate(&self, frames: usize) -> GaitResult<()> {
        for side in Side::BOTH {
            for segment in Segment::ALL {
                let signal = self.get(side, segment);
                if signal.is_empty() {
                    return Err(GaitError::MissingSegment(segment.label(side)));
                }
                if signal.len() != frames {
                    return Err(GaitError::length_mismatch(
                        segment.label(side),
                        frames,
                        signal.len(),
                    ));
                }
            }
        }
        Ok(())
    }
}

const fn segment_slot(segment: Segment) -> usize {
    match segment {
        Segment::Thigh => 0,
        Segment::Shank => 1,
        Segment::Foot => 2,
    }
}

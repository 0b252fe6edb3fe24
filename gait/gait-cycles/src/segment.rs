//! Stride segmentation of joint-angle signals.

use gait_types::{AngleSet, AngleSignal, EventSet, GaitResult, Joint, Plane, Side, SideMap};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::params::CycleParams;
use crate::resample::Resampler;

/// One stride of one joint, time-normalised to a fixed number of samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cycle {
    /// Heel-strike frame opening the stride.
    pub start_frame: usize,
    /// Heel-strike frame closing the stride (exclusive).
    pub end_frame: usize,
    samples: Vec<[f64; 3]>,
}

impl Cycle {
    /// Creates a cycle from already normalised samples.
    #[must_use]
    pub const fn new(start_frame: usize, end_frame: usize, samples: Vec<[f64; 3]>) -> Self {
        Self {
            start_frame,
            end_frame,
            samples,
        }
    }

    /// Normalised `[sagittal, frontal, transverse]` samples.
    #[must_use]
    pub fn samples(&self) -> &[[f64; 3]] {
        &self.samples
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the cycle has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// One plane of the cycle.
    #[must_use]
    pub fn plane(&self, plane: Plane) -> Vec<f64> {
        let i = plane.index();
        self.samples.iter().map(|s| s[i]).collect()
    }
}

/// All strides of one joint on one side, in stride order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleEnsemble {
    /// Side the strides belong to.
    pub side: Side,
    /// Joint the angles describe.
    pub joint: Joint,
    /// Normalised strides.
    pub cycles: Vec<Cycle>,
    /// Strides whose window could not be resampled.
    pub degenerate_cycles: usize,
}

impl CycleEnsemble {
    /// Creates an empty ensemble.
    #[must_use]
    pub const fn empty(side: Side, joint: Joint) -> Self {
        Self {
            side,
            joint,
            cycles: Vec::new(),
            degenerate_cycles: 0,
        }
    }

    /// Number of strides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    /// Returns true if the ensemble holds no strides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }
}

/// Ensembles of the hip, knee and ankle of one side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointEnsembles {
    /// Hip strides, from the thigh signal.
    pub hip: CycleEnsemble,
    /// Knee strides, from the shank signal.
    pub knee: CycleEnsemble,
    /// Ankle strides, from the foot signal.
    pub ankle: CycleEnsemble,
}

impl JointEnsembles {
    /// The ensemble of `joint`.
    #[must_use]
    pub const fn get(&self, joint: Joint) -> &CycleEnsemble {
        match joint {
            Joint::Hip => &self.hip,
            Joint::Knee => &self.knee,
            Joint::Ankle => &self.ankle,
        }
    }

    /// Ensembles in proximal-to-distal order.
    pub fn iter(&self) -> impl Iterator<Item = &CycleEnsemble> {
        [&self.hip, &self.knee, &self.ankle].into_iter()
    }
}

/// Cuts `signal` into strides `[HS_i, HS_i+1)` and resamples each.
///
/// A side with fewer than two heel-strikes yields an empty ensemble. A stride
/// whose window lies outside the signal is skipped and counted as
/// degenerate.
#[must_use]
pub fn segment_signal(
    signal: &AngleSignal,
    heel_strikes: &EventSet,
    side: Side,
    joint: Joint,
    resampler: &mut Resampler,
) -> CycleEnsemble {
    let mut ensemble = CycleEnsemble::empty(side, joint);
    for (start, end) in heel_strikes.strides() {
        match resampler.resample_columns(signal.window(start, end)) {
            Ok(samples) => ensemble.cycles.push(Cycle::new(start, end, samples)),
            Err(err) => {
                debug!(%side, %joint, start, end, error = %err, "Skipping stride");
                ensemble.degenerate_cycles += 1;
            }
        }
    }
    ensemble
}

/// Segments the hip, knee and ankle signals of both sides.
///
/// # Errors
///
/// Returns a configuration error if `params` are invalid.
pub fn segment_trial(
    angles: &AngleSet,
    heel_strikes: &SideMap<EventSet>,
    params: &CycleParams,
) -> GaitResult<SideMap<JointEnsembles>> {
    params.validate()?;
    let mut resampler = Resampler::new(params.method, params.points);

    let ensembles = SideMap::from_fn(|side| {
        let mut segment = |joint: Joint| {
            segment_signal(
                angles.get(side, joint.segment()),
                &heel_strikes[side],
                side,
                joint,
                &mut resampler,
            )
        };
        JointEnsembles {
            hip: segment(Joint::Hip),
            knee: segment(Joint::Knee),
            ankle: segment(Joint::Ankle),
        }
    });

    info!(
        method = ?params.method,
        left_cycles = ensembles.left.hip.len(),
        right_cycles = ensembles.right.hip.len(),
        "Strides segmented"
    );
    Ok(ensembles)
}

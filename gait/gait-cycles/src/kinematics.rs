//! Discrete kinematic parameters of normalised strides.

use gait_types::{Joint, MeanStd, Plane, SideMap, round_to};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::segment::{Cycle, CycleEnsemble, JointEnsembles};

/// Parameters of one plane of one stride.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CycleParameters {
    /// Maximum angle.
    pub peak_value: f64,
    /// Index of the maximum, i.e. percent of cycle for a 101-sample cycle.
    pub peak_location: usize,
    /// Maximum minus minimum.
    pub range_of_motion: f64,
}

impl CycleParameters {
    #[allow(clippy::cast_precision_loss)]
    fn location_percent(&self) -> f64 {
        self.peak_location as f64
    }

    /// Computes the parameters of `plane`. Returns `None` for an empty cycle.
    ///
    /// The first sample holding the maximum gives the peak location.
    #[must_use]
    pub fn of(cycle: &Cycle, plane: Plane) -> Option<Self> {
        let values = cycle.plane(plane);
        let (peak_location, peak_value) = values
            .iter()
            .copied()
            .enumerate()
            .reduce(|best, next| if next.1 > best.1 { next } else { best })?;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        Some(Self {
            peak_value,
            peak_location,
            range_of_motion: peak_value - min,
        })
    }
}

/// Aggregated parameters of one plane of one joint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneKinematics {
    /// Peak angle.
    pub peak_value: MeanStd,
    /// Peak location, percent of cycle.
    pub peak_location: MeanStd,
    /// Range of motion.
    pub range_of_motion: MeanStd,
}

/// Aggregated parameters of one joint in the three planes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointKinematics {
    /// Joint.
    pub joint: Joint,
    /// Strides aggregated.
    pub cycles: usize,
    /// Sagittal plane.
    pub sagittal: PlaneKinematics,
    /// Frontal plane.
    pub frontal: PlaneKinematics,
    /// Transverse plane.
    pub transverse: PlaneKinematics,
}

impl JointKinematics {
    /// Parameters of `plane`.
    #[must_use]
    pub const fn plane(&self, plane: Plane) -> &PlaneKinematics {
        match plane {
            Plane::Sagittal => &self.sagittal,
            Plane::Frontal => &self.frontal,
            Plane::Transverse => &self.transverse,
        }
    }

    /// Summarises `ensemble`. Returns `None` when it holds no strides.
    ///
    /// Per-stride values are rounded to `decimals` before aggregation and the
    /// aggregate is left unrounded. The spread is the sample standard
    /// deviation (0 for a single stride).
    #[must_use]
    pub fn summarize(ensemble: &CycleEnsemble, decimals: u32) -> Option<Self> {
        if ensemble.is_empty() {
            return None;
        }
        let plane = |plane: Plane| summarize_plane(&ensemble.cycles, plane, decimals);
        Some(Self {
            joint: ensemble.joint,
            cycles: ensemble.len(),
            sagittal: plane(Plane::Sagittal)?,
            frontal: plane(Plane::Frontal)?,
            transverse: plane(Plane::Transverse)?,
        })
    }
}

/// Kinematic summary of one side; empty when the side has no strides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KinematicSummary {
    /// Joints with at least one stride, proximal to distal.
    pub joints: Vec<JointKinematics>,
}

impl KinematicSummary {
    /// Summarises every joint ensemble of one side.
    #[must_use]
    pub fn from_ensembles(ensembles: &JointEnsembles, decimals: u32) -> Self {
        Self {
            joints: ensembles
                .iter()
                .filter_map(|e| JointKinematics::summarize(e, decimals))
                .collect(),
        }
    }

    /// The summary of `joint`, if it had strides.
    #[must_use]
    pub fn get(&self, joint: Joint) -> Option<&JointKinematics> {
        self.joints.iter().find(|j| j.joint == joint)
    }

    /// Returns true if no joint had strides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }
}

/// Kinematic summaries of both sides.
#[must_use]
pub fn summarize_sides(ensembles: &SideMap<JointEnsembles>, decimals: u32) -> SideMap<KinematicSummary> {
    ensembles.map_ref(|side, e| {
        let summary = KinematicSummary::from_ensembles(e, decimals);
        debug!(%side, joints = summary.joints.len(), "Kinematics summarised");
        summary
    })
}

fn summarize_plane(cycles: &[Cycle], plane: Plane, decimals: u32) -> Option<PlaneKinematics> {
    let params: Vec<CycleParameters> = cycles
        .iter()
        .filter_map(|c| CycleParameters::of(c, plane))
        .collect();

    let column = |f: fn(&CycleParameters) -> f64| {
        let values: Vec<f64> = params.iter().map(|p| round_to(f(p), decimals)).collect();
        MeanStd::sample(&values)
    };

    Some(PlaneKinematics {
        peak_value: column(|p| p.peak_value)?,
        peak_location: column(CycleParameters::location_percent)?,
        range_of_motion: column(|p| p.range_of_motion)?,
    })
}

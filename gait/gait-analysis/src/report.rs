//! Results of one trial analysis.

use gait_cycles::{JointCurves, JointEnsembles, KinematicSummary};
use gait_events::{GaitEvents, SidePhases, ToeOffPercent};
use gait_force::ForceCycle;
use gait_spatiotemporal::{GlobalSummary, SpatiotemporalRecord};
use gait_types::{Axis, SampleRate, SideMap};
use serde::Serialize;

/// Force-plate output of a trial.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ForceData {
    /// A stance cycle was extracted.
    Present(ForceCycle),

    /// No stance cycle is available.
    Absent {
        /// Why the force output is missing.
        reason: String,
        /// Sample rate in effect when a recording was read.
        sample_rate: Option<SampleRate>,
    },
}

impl ForceData {
    /// The force cycle, if one was extracted.
    #[must_use]
    pub const fn cycle(&self) -> Option<&ForceCycle> {
        match self {
            Self::Present(cycle) => Some(cycle),
            Self::Absent { .. } => None,
        }
    }

    pub(crate) fn absent(reason: impl Into<String>, sample_rate: Option<SampleRate>) -> Self {
        Self::Absent {
            reason: reason.into(),
            sample_rate,
        }
    }
}

/// Every result of one trial, ready for serialization.
///
/// Per-side fields hold explicit empty values for a side without cycles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialReport {
    /// Biomechanical model name.
    pub model: String,
    /// Frames in the trial.
    pub frames: usize,
    /// Walking axis.
    pub axis: Axis,
    /// Heel-strikes and toe-offs.
    pub events: GaitEvents,
    /// Per-cycle phase percentages.
    pub phases: SideMap<SidePhases>,
    /// Toe-off position within each stride.
    pub toe_off: SideMap<ToeOffPercent>,
    /// Normalised strides of the hip, knee and ankle.
    pub ensembles: SideMap<JointEnsembles>,
    /// Mean and spread curves.
    pub curves: SideMap<JointCurves>,
    /// Discrete kinematic parameters.
    pub kinematics: SideMap<KinematicSummary>,
    /// Spatiotemporal metrics.
    pub spatiotemporal: SpatiotemporalRecord,
    /// Trial-wide distance, speed and cadence.
    pub global: GlobalSummary,
    /// Force-plate stance cycle.
    pub force: ForceData,
}

impl TrialReport {
    /// Serializes the report as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be represented in JSON.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use gait_types::RateSource;

    #[test]
    fn absent_force_is_tagged() {
        let data = ForceData::absent(
            "no foot contact found in force recording",
            Some(SampleRate {
                hz: 1000.0,
                source: RateSource::Default,
            }),
        );
        assert!(data.cycle().is_none());
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["status"], "absent");
        assert_eq!(json["sample_rate"]["source"], "default");
    }
}

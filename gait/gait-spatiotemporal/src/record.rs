//! Per-side spatiotemporal metrics.

use std::collections::BTreeMap;
use std::fmt;

use gait_events::{PhaseCycle, SidePhases};
use gait_types::{EventSet, FrameTimes, MeanStd, Side, SideMap, Trajectory};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::params::SpatiotemporalParams;
use crate::steps::{foot_placements, step_geometry, step_times, stride_lengths, stride_times};

/// A reported spatiotemporal metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Ankle displacement over one stride, in trajectory units.
    StrideLength,
    /// Progression of one step, in trajectory units.
    StepLength,
    /// Mediolateral step width, in trajectory units.
    BaseOfSupport,
    /// Seconds per stride.
    StrideTime,
    /// Seconds per step.
    StepTime,
    /// Stance, percent of cycle.
    StancePhase,
    /// Swing, percent of cycle.
    SwingPhase,
    /// Both double-support intervals, percent of cycle.
    DoubleSupport,
}

impl Metric {
    /// All metrics in report order.
    pub const ALL: [Self; 8] = [
        Self::StrideLength,
        Self::StepLength,
        Self::BaseOfSupport,
        Self::StrideTime,
        Self::StepTime,
        Self::StancePhase,
        Self::SwingPhase,
        Self::DoubleSupport,
    ];
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::StrideLength => "stride_length",
            Self::StepLength => "step_length",
            Self::BaseOfSupport => "base_of_support",
            Self::StrideTime => "stride_time",
            Self::StepTime => "step_time",
            Self::StancePhase => "stance_phase",
            Self::SwingPhase => "swing_phase",
            Self::DoubleSupport => "double_support",
        };
        f.write_str(name)
    }
}

/// Rounded `(mean, std)` pairs per metric and side.
///
/// A metric with no underlying values is absent rather than zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpatiotemporalRecord {
    /// Metrics per side.
    pub sides: SideMap<BTreeMap<Metric, MeanStd>>,
    /// Steps skipped because their neighbouring placements coincided.
    pub degenerate_steps: usize,
}

impl SpatiotemporalRecord {
    /// The value of `metric` on `side`, if any.
    #[must_use]
    pub fn get(&self, side: Side, metric: Metric) -> Option<MeanStd> {
        self.sides[side].get(&metric).copied()
    }

    fn insert(&mut self, side: Side, metric: Metric, values: &[f64], decimals: u32) {
        if let Some(summary) = MeanStd::population(values) {
            self.sides[side].insert(metric, summary.rounded(decimals));
        }
    }
}

/// Computes every spatiotemporal metric of both sides.
///
/// Stride metrics use each side's own heel-strikes. Step metrics use the
/// chronological merge of both sides. Step length and base of support go to
/// the landing foot, step time to the foot whose strike starts the step.
/// Phase metrics average the classified cycles.
#[must_use]
pub fn compute_spatiotemporal(
    ankle: &SideMap<Trajectory>,
    heel_strikes: &SideMap<EventSet>,
    phases: &SideMap<SidePhases>,
    times: &FrameTimes,
    params: &SpatiotemporalParams,
) -> SpatiotemporalRecord {
    let decimals = params.decimals;
    let mut record = SpatiotemporalRecord::default();

    let (steps, degenerate_steps) = step_geometry(&foot_placements(ankle, heel_strikes));
    record.degenerate_steps = degenerate_steps;
    let timed_steps = step_times(heel_strikes, times);

    for side in Side::BOTH {
        let strides = stride_lengths(&ankle[side], &heel_strikes[side]);
        record.insert(side, Metric::StrideLength, &strides, decimals);
        record.insert(side, Metric::StrideTime, &stride_times(&heel_strikes[side], times), decimals);

        let landed = steps.iter().filter(|s| s.side == side);
        let lengths: Vec<f64> = landed.clone().map(|s| s.step_length).collect();
        let widths: Vec<f64> = landed.map(|s| s.base_of_support).collect();
        let durations: Vec<f64> = timed_steps
            .iter()
            .filter(|s| s.side == side)
            .map(|s| s.seconds)
            .collect();
        record.insert(side, Metric::StepLength, &lengths, decimals);
        record.insert(side, Metric::BaseOfSupport, &widths, decimals);
        record.insert(side, Metric::StepTime, &durations, decimals);

        let phase = |f: fn(&PhaseCycle) -> f64| -> Vec<f64> {
            phases[side].cycles.iter().map(f).collect()
        };
        record.insert(side, Metric::StancePhase, &phase(|c| c.stance_percent), decimals);
        record.insert(side, Metric::SwingPhase, &phase(|c| c.swing_percent), decimals);
        record.insert(side, Metric::DoubleSupport, &phase(PhaseCycle::double_support_percent), decimals);
    }

    info!(
        steps = steps.len(),
        degenerate_steps,
        left_metrics = record.sides.left.len(),
        right_metrics = record.sides.right.len(),
        "Spatiotemporal metrics computed"
    );
    record
}

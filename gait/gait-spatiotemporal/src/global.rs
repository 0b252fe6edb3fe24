//! Whole-trial walking summary.

use gait_types::{FrameTimes, Side, Trajectory, round_to};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::params::SpatiotemporalParams;
use crate::record::{Metric, SpatiotemporalRecord};

/// Distance, duration, speed, cadence and walk ratio of a trial.
///
/// Quantities that need a positive duration, or step lengths on both sides,
/// are absent when those are missing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobalSummary {
    /// Straight-line pelvis displacement, metres.
    pub distance_m: f64,
    /// Time from the first to the last frame, seconds.
    pub duration_s: f64,
    /// Mean walking speed, metres per second.
    pub speed_m_per_s: Option<f64>,
    /// Steps per minute, from the total heel-strike count.
    pub cadence_steps_per_min: Option<f64>,
    /// Mean step length of both sides divided by cadence.
    pub walk_ratio: Option<f64>,
}

/// Summarises a trial.
///
/// Cadence counts `total_heel_strikes - 1` steps over the trial duration,
/// independently of the merged step sequence. The walk ratio divides the
/// average of both sides' reported mean step length by that cadence.
///
/// # Example
///
/// ```
/// use gait_spatiotemporal::{SpatiotemporalParams, SpatiotemporalRecord, global_summary};
/// use gait_types::{FrameTimes, Trajectory};
/// use nalgebra::Point3;
///
/// // 10 m straight pelvis path over 10 s, 20 heel-strikes.
/// let pelvis = Trajectory::new(
///     "pelvis",
///     (0..=1000).map(|f| Point3::new(0.0, f64::from(f) * 10.0, 950.0)).collect(),
/// );
/// let times = FrameTimes::uniform(100.0, 1001);
/// let summary = global_summary(
///     &pelvis,
///     20,
///     &SpatiotemporalRecord::default(),
///     &times,
///     &SpatiotemporalParams::default(),
/// );
/// assert_eq!(summary.speed_m_per_s, Some(1.0));
/// assert_eq!(summary.cadence_steps_per_min, Some(114.0));
/// assert_eq!(summary.walk_ratio, None);
/// ```
#[must_use]
pub fn global_summary(
    pelvis: &Trajectory,
    total_heel_strikes: usize,
    record: &SpatiotemporalRecord,
    times: &FrameTimes,
    params: &SpatiotemporalParams,
) -> GlobalSummary {
    let decimals = params.decimals;
    let distance = match (pelvis.first(), pelvis.last()) {
        (Some(first), Some(last)) => (last - first).norm() * params.metres_per_unit,
        _ => 0.0,
    };
    let duration = times.duration();

    let positive = duration > 0.0 && duration.is_finite();
    if !positive {
        warn!(duration, "Non-positive trial duration; speed and cadence are absent");
    }

    let speed = positive.then(|| distance / duration);
    #[allow(clippy::cast_precision_loss)]
    let cadence = (positive && total_heel_strikes >= 2)
        .then(|| (total_heel_strikes - 1) as f64 / (duration / 60.0));

    let step_length = |side: Side| record.get(side, Metric::StepLength).map(|s| s.mean);
    let walk_ratio = match (step_length(Side::Left), step_length(Side::Right), cadence) {
        (Some(left), Some(right), Some(cadence)) if cadence > 0.0 => {
            Some(round_to((left + right) / 2.0 / cadence, decimals))
        }
        _ => None,
    };

    let summary = GlobalSummary {
        distance_m: round_to(distance, decimals),
        duration_s: round_to(duration, decimals),
        speed_m_per_s: speed.map(|v| round_to(v, decimals)),
        cadence_steps_per_min: cadence.map(|v| round_to(v, decimals)),
        walk_ratio,
    };
    info!(
        distance_m = summary.distance_m,
        duration_s = summary.duration_s,
        speed = ?summary.speed_m_per_s,
        cadence = ?summary.cadence_steps_per_min,
        "Global summary computed"
    );
    summary
}

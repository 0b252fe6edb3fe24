//! Foot placements, step geometry and step timing.
//!
//! Heel-strikes of both sides are merged into one chronological sequence of
//! side-tagged foot placements. Every interior placement `p3` is compared with
//! its neighbours `p1` (previous) and `p2` (next): projecting `p3` onto the
//! line `p1 → p2` gives the foot point `p4`, so the step length is
//! `|p1 - p4|` and the base of support is `|p4 - p3|`. Step geometry belongs
//! to the side of the foot that lands at `p3`; a step time belongs to the side
//! whose heel-strike starts the interval.

use gait_events::Timeline;
use gait_types::{EventSet, FrameTimes, GaitError, GaitResult, Side, SideMap, Trajectory};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Ankle position of one heel-strike.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FootPlacement {
    /// Side of the landing foot.
    pub side: Side,
    /// Heel-strike frame.
    pub frame: usize,
    /// Ankle joint centre at the heel-strike.
    pub position: Point3<f64>,
}

/// Length and width of one step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepGeometry {
    /// Side of the landing foot.
    pub side: Side,
    /// Landing frame.
    pub frame: usize,
    /// Distance travelled along the line of progression.
    pub step_length: f64,
    /// Mediolateral distance from the line of progression.
    pub base_of_support: f64,
}

/// Duration of one step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepTime {
    /// Side whose heel-strike starts the step.
    pub side: Side,
    /// Starting frame.
    pub frame: usize,
    /// Seconds until the next heel-strike of either side.
    pub seconds: f64,
}

/// Projects `p3` onto the line `p1 → p2`.
///
/// Returns `(step_length, base_of_support)`.
///
/// # Errors
///
/// Returns [`GaitError::DegenerateCycle`] when `p1` and `p2` coincide.
///
/// # Example
///
/// ```
/// use gait_spatiotemporal::project_step;
/// use nalgebra::Point3;
///
/// let p1 = Point3::new(-100.0, 0.0, 0.0);
/// let p3 = Point3::new(100.0, 500.0, 0.0);
/// let p2 = Point3::new(-100.0, 1000.0, 0.0);
/// let (length, width) = project_step(&p1, &p2, &p3).unwrap();
/// assert!((length - 500.0).abs() < 1e-9);
/// assert!((width - 200.0).abs() < 1e-9);
/// ```
pub fn project_step(p1: &Point3<f64>, p2: &Point3<f64>, p3: &Point3<f64>) -> GaitResult<(f64, f64)> {
    let v = p2 - p1;
    let w = p3 - p1;
    let norm_sq = v.norm_squared();
    if norm_sq <= f64::EPSILON {
        return Err(GaitError::degenerate("neighbouring foot placements coincide"));
    }
    let p4 = p1 + v * (w.dot(&v) / norm_sq);
    Ok(((p1 - p4).norm(), (p4 - p3).norm()))
}

/// Merges the heel-strike ankle positions of both sides chronologically.
///
/// Heel-strikes outside the trajectory are dropped with a warning.
#[must_use]
pub fn foot_placements(ankle: &SideMap<Trajectory>, heel_strikes: &SideMap<EventSet>) -> Vec<FootPlacement> {
    Timeline::from_heel_strikes(heel_strikes)
        .events()
        .iter()
        .filter_map(|event| {
            let position = ankle[event.side].at(event.frame).copied();
            if position.is_none() {
                warn!(side = %event.side, frame = event.frame, "Heel-strike outside ankle trajectory");
            }
            Some(FootPlacement {
                side: event.side,
                frame: event.frame,
                position: position?,
            })
        })
        .collect()
}

/// Step geometry of every interior placement.
///
/// Returns the steps and the number of degenerate projections skipped.
#[must_use]
pub fn step_geometry(placements: &[FootPlacement]) -> (Vec<StepGeometry>, usize) {
    let mut steps = Vec::new();
    let mut degenerate = 0;
    for window in placements.windows(3) {
        let [p1, p3, p2] = [&window[0], &window[1], &window[2]];
        match project_step(&p1.position, &p2.position, &p3.position) {
            Ok((step_length, base_of_support)) => steps.push(StepGeometry {
                side: p3.side,
                frame: p3.frame,
                step_length,
                base_of_support,
            }),
            Err(err) => {
                debug!(side = %p3.side, frame = p3.frame, error = %err, "Skipping step");
                degenerate += 1;
            }
        }
    }
    (steps, degenerate)
}

/// Time between consecutive heel-strikes of either side, credited to the
/// side of the earlier strike.
///
/// Heel-strikes without a timestamp are dropped.
#[must_use]
pub fn step_times(heel_strikes: &SideMap<EventSet>, times: &FrameTimes) -> Vec<StepTime> {
    let stamped: Vec<(Side, usize, f64)> = Timeline::from_heel_strikes(heel_strikes)
        .events()
        .iter()
        .filter_map(|e| Some((e.side, e.frame, times.at(e.frame)?)))
        .collect();

    stamped
        .windows(2)
        .map(|pair| StepTime {
            side: pair[0].0,
            frame: pair[0].1,
            seconds: pair[1].2 - pair[0].2,
        })
        .collect()
}

/// Ankle displacement between consecutive same-side heel-strikes.
#[must_use]
pub fn stride_lengths(ankle: &Trajectory, heel_strikes: &EventSet) -> Vec<f64> {
    let positions: Vec<Point3<f64>> = heel_strikes
        .frames()
        .iter()
        .filter_map(|&frame| ankle.at(frame).copied())
        .collect();
    positions.windows(2).map(|w| (w[1] - w[0]).norm()).collect()
}

/// Time between consecutive same-side heel-strikes.
#[must_use]
pub fn stride_times(heel_strikes: &EventSet, times: &FrameTimes) -> Vec<f64> {
    let stamps: Vec<f64> = heel_strikes
        .frames()
        .iter()
        .filter_map(|&frame| times.at(frame))
        .collect();
    stamps.windows(2).map(|w| w[1] - w[0]).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn collinear_midpoint_has_no_width() {
        let p1 = Point3::new(0.0, 0.0, 0.0);
        let p2 = Point3::new(0.0, 1200.0, 0.0);
        let mid = Point3::new(0.0, 600.0, 0.0);
        let (length, width) = project_step(&p1, &p2, &mid).unwrap();
        assert_relative_eq!(length, 600.0);
        assert_relative_eq!(width, 0.0);
    }

    #[test]
    fn coincident_neighbours_are_degenerate() {
        let p = Point3::new(10.0, 10.0, 0.0);
        assert!(matches!(
            project_step(&p, &p, &Point3::origin()),
            Err(GaitError::DegenerateCycle { .. })
        ));
    }

    fn placement(side: Side, frame: usize, x: f64, y: f64) -> FootPlacement {
        FootPlacement {
            side,
            frame,
            position: Point3::new(x, y, 0.0),
        }
    }

    #[test]
    fn steps_take_the_landing_side() {
        let placements = [
            placement(Side::Right, 10, 100.0, 0.0),
            placement(Side::Left, 60, -100.0, 500.0),
            placement(Side::Right, 110, 100.0, 1000.0),
            placement(Side::Right, 160, 100.0, 1000.0),
            placement(Side::Left, 210, 100.0, 1000.0),
        ];
        let (steps, degenerate) = step_geometry(&placements);
        assert_eq!(steps.len(), 2);
        assert_eq!(degenerate, 1);
        assert_eq!(steps[0].side, Side::Left);
        assert_relative_eq!(steps[0].step_length, 500.0);
        assert_relative_eq!(steps[0].base_of_support, 200.0);
        assert_eq!(steps[1].side, Side::Right);
        assert_eq!(steps[1].frame, 110);
    }

    #[test]
    fn placements_are_chronological() {
        let ankle = SideMap::from_fn(|side| {
            let x = if side == Side::Left { -1.0 } else { 1.0 };
            Trajectory::new("ankle", (0..50).map(|f| Point3::new(x, f64::from(f), 0.0)).collect())
        });
        let hs = SideMap::new(
            EventSet::from_frames(vec![5, 25, 45, 60]).unwrap(),
            EventSet::from_frames(vec![15, 35]).unwrap(),
        );
        let placements = foot_placements(&ankle, &hs);
        let frames: Vec<usize> = placements.iter().map(|p| p.frame).collect();
        assert_eq!(frames, vec![5, 15, 25, 35, 45]);
        assert_eq!(placements[1].side, Side::Right);
        assert_relative_eq!(placements[1].position.x, 1.0);
    }

    #[test]
    fn step_and_stride_times() {
        let times = FrameTimes::uniform(100.0, 300);
        let hs = SideMap::new(
            EventSet::from_frames(vec![20, 120, 220]).unwrap(),
            EventSet::from_frames(vec![60, 160]).unwrap(),
        );
        let steps = step_times(&hs, &times);
        let seconds: Vec<f64> = steps.iter().map(|s| s.seconds).collect();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0].side, Side::Left);
        assert_eq!(steps[0].frame, 20);
        assert_relative_eq!(seconds[0], 0.4, epsilon = 1e-12);
        assert_relative_eq!(seconds[1], 0.6, epsilon = 1e-12);

        let strides = stride_times(&hs.left, &times);
        assert_eq!(strides.len(), 2);
        assert_relative_eq!(strides[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn asymmetric_step_times_go_to_the_starting_side() {
        let times = FrameTimes::uniform(100.0, 200);
        let hs = SideMap::new(
            EventSet::from_frames(vec![0, 100]).unwrap(),
            EventSet::from_frames(vec![30, 130]).unwrap(),
        );
        let steps = step_times(&hs, &times);
        let of = |side| -> Vec<f64> {
            steps.iter().filter(|s| s.side == side).map(|s| s.seconds).collect()
        };
        let (left, right) = (of(Side::Left), of(Side::Right));
        assert_eq!(left.len(), 2);
        assert_relative_eq!(left[0], 0.3, epsilon = 1e-12);
        assert_relative_eq!(left[1], 0.3, epsilon = 1e-12);
        assert_eq!(right.len(), 1);
        assert_relative_eq!(right[0], 0.7, epsilon = 1e-12);
    }

    #[test]
    fn stride_length_is_displacement_norm() {
        let ankle = Trajectory::new(
            "ankle",
            (0..300).map(|f| Point3::new(3.0, 4.0 * f64::from(f), 0.0)).collect(),
        );
        let hs = EventSet::from_frames(vec![0, 100, 250]).unwrap();
        let lengths = stride_lengths(&ankle, &hs);
        assert_relative_eq!(lengths[0], 400.0);
        assert_relative_eq!(lengths[1], 600.0);
    }
}

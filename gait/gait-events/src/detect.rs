//! Heel-strike and toe-off detection from marker-to-pelvis distances.
//!
//! At heel-strike the heel is at its most anterior position relative to the
//! pelvis; at toe-off the toe is at its most posterior. Both events are
//! therefore extrema of a 1-D distance signal along the walking axis. Which
//! extremum (maximum or minimum) depends on the direction of travel, which is
//! read from whether the toe starts ahead of the heel.

use gait_types::{Axis, EventSet, MarkerSet, Side, SideMap};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::params::EventParams;
use crate::peaks::find_peaks;

/// Heel-strike and toe-off frames of both sides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GaitEvents {
    /// Heel-strike frames per side.
    pub heel_strikes: SideMap<EventSet>,
    /// Toe-off frames per side.
    pub toe_offs: SideMap<EventSet>,
}

impl GaitEvents {
    /// Total heel-strikes over both sides.
    #[must_use]
    pub fn total_heel_strikes(&self) -> usize {
        self.heel_strikes.left.len() + self.heel_strikes.right.len()
    }
}

/// Detects heel-strikes from 1-D heel, toe and pelvis coordinates.
///
/// Returns an empty set when no extremum reaches `min_prominence`.
///
/// # Example
///
/// ```
/// use gait_events::detect_heel_strikes;
///
/// // Walking towards +axis: the toe starts ahead of the heel.
/// let pelvis = [0.0; 7];
/// let heel = [0.0, 150.0, 300.0, 150.0, 0.0, 50.0, 0.0];
/// let toe = [200.0; 7];
/// assert_eq!(detect_heel_strikes(&heel, &toe, &pelvis, 100.0).frames(), &[2]);
/// ```
#[must_use]
pub fn detect_heel_strikes(heel: &[f64], toe: &[f64], pelvis: &[f64], min_prominence: f64) -> EventSet {
    let distance = relative_to(heel, pelvis);
    let forward = matches!((toe.first(), heel.first()), (Some(t), Some(h)) if t > h);
    extrema(&distance, forward, min_prominence)
}

/// Detects toe-offs from 1-D toe, heel and pelvis coordinates.
///
/// Returns an empty set when no extremum reaches `min_prominence`.
#[must_use]
pub fn detect_toe_offs(toe: &[f64], heel: &[f64], pelvis: &[f64], min_prominence: f64) -> EventSet {
    let distance = relative_to(toe, pelvis);
    let forward = matches!((heel.first(), toe.first()), (Some(h), Some(t)) if h < t);
    extrema(&distance, !forward, min_prominence)
}

/// Detects heel-strikes and toe-offs of both sides along `axis`.
#[must_use]
pub fn detect_events(markers: &MarkerSet, axis: Axis, params: &EventParams) -> GaitEvents {
    let pelvis = markers.pelvis.along(axis);

    let mut events = GaitEvents::default();
    for side in Side::BOTH {
        let heel = markers.heel[side].along(axis);
        let toe = markers.toe[side].along(axis);

        let hs = detect_heel_strikes(&heel, &toe, &pelvis, params.min_prominence);
        let to = detect_toe_offs(&toe, &heel, &pelvis, params.min_prominence);

        debug!(%side, heel_strikes = ?hs.frames(), toe_offs = ?to.frames(), "Detected events");
        if hs.cycle_count() == 0 {
            warn!(%side, heel_strikes = hs.len(), "Fewer than two heel-strikes; side yields no cycles");
        }

        events.heel_strikes[side] = hs;
        events.toe_offs[side] = to;
    }

    info!(
        %axis,
        left_heel_strikes = events.heel_strikes.left.len(),
        right_heel_strikes = events.heel_strikes.right.len(),
        left_toe_offs = events.toe_offs.left.len(),
        right_toe_offs = events.toe_offs.right.len(),
        "Gait events detected"
    );
    events
}

fn relative_to(marker: &[f64], pelvis: &[f64]) -> Vec<f64> {
    marker.iter().zip(pelvis).map(|(m, p)| m - p).collect()
}

fn extrema(signal: &[f64], maxima: bool, min_prominence: f64) -> EventSet {
    let peaks = if maxima {
        find_peaks(signal, min_prominence)
    } else {
        let negated: Vec<f64> = signal.iter().map(|v| -v).collect();
        find_peaks(&negated, min_prominence)
    };
    // Peak indices are produced in strictly increasing order.
    EventSet::from_frames(peaks).unwrap_or_default()
}

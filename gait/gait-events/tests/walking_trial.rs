//! Event detection and phase classification on a synthetic straight walk.

#![allow(clippy::unwrap_used, clippy::cast_precision_loss)]

use std::f64::consts::TAU;

use approx::assert_relative_eq;
use gait_events::{
    EventParams, PhaseStrategy, Timeline, classify_phases, detect_events, select_axis,
    toe_off_percentages,
};
use gait_types::{Axis, MarkerSet, Side, SideMap, Trajectory};
use nalgebra::Point3;

const FRAMES: usize = 500;

/// 100 Hz walk along +Y at 1 m/s with a 100-frame stride. Left heel-strikes
/// fall at 25 + 100k, right ones at 75 + 100k; every toe-off follows its
/// heel-strike by 60 frames.
fn walking_markers() -> MarkerSet {
    let pelvis_y = |f: usize| 10.0 * f as f64;
    let heel_rel = |f: usize, strike: f64| 300.0 * (TAU * (f as f64 - strike) / 100.0).cos();
    let toe_rel = |f: usize, strike: f64| 700.0 - 300.0 * (TAU * (f as f64 - strike - 60.0) / 100.0).cos();

    let track = |label: &str, x: f64, y: &dyn Fn(usize) -> f64| {
        Trajectory::new(label, (0..FRAMES).map(|f| Point3::new(x, y(f), 0.0)).collect())
    };

    let strike = |side: Side| if side == Side::Left { 25.0 } else { 75.0 };
    let lateral = |side: Side| if side == Side::Left { -100.0 } else { 100.0 };

    MarkerSet {
        heel: SideMap::from_fn(|side| {
            track("heel", lateral(side), &|f: usize| pelvis_y(f) + heel_rel(f, strike(side)))
        }),
        toe: SideMap::from_fn(|side| {
            track("toe", lateral(side), &|f: usize| pelvis_y(f) + toe_rel(f, strike(side)))
        }),
        ankle: SideMap::from_fn(|side| {
            track("ankle", lateral(side), &|f: usize| pelvis_y(f) + heel_rel(f, strike(side)))
        }),
        pelvis: track("pelvis", 0.0, &pelvis_y),
    }
}

#[test]
fn walking_axis_is_y() {
    assert_eq!(select_axis(&walking_markers().pelvis), Axis::Y);
}

#[test]
fn detects_expected_events() {
    let markers = walking_markers();
    let events = detect_events(&markers, Axis::Y, &EventParams::default());

    assert_eq!(events.heel_strikes.left.frames(), &[25, 125, 225, 325, 425]);
    assert_eq!(events.heel_strikes.right.frames(), &[75, 175, 275, 375, 475]);
    assert_eq!(events.toe_offs.left.frames(), &[85, 185, 285, 385, 485]);
    assert_eq!(events.toe_offs.right.frames(), &[35, 135, 235, 335, 435]);
    assert_eq!(events.total_heel_strikes(), 10);
}

#[test]
fn small_amplitude_yields_no_events() {
    let markers = walking_markers();
    let params = EventParams::default().min_prominence(1000.0);
    let events = detect_events(&markers, Axis::Y, &params);
    assert_eq!(events.total_heel_strikes(), 0);
    assert!(events.toe_offs.left.is_empty());

    let phases = classify_phases(&events, PhaseStrategy::Timeline);
    assert!(phases.left.cycles.is_empty());
    assert!(phases.right.cycles.is_empty());
}

#[test]
fn both_strategies_classify_every_stride() {
    let events = detect_events(&walking_markers(), Axis::Y, &EventParams::default());

    for strategy in [PhaseStrategy::Timeline, PhaseStrategy::GlobalAlignment] {
        let phases = classify_phases(&events, strategy);
        for side in Side::BOTH {
            let side_phases = &phases[side];
            assert_eq!(side_phases.cycles.len(), 4, "{strategy:?} {side}");
            assert_eq!(side_phases.degenerate_cycles, 0);
            for cycle in &side_phases.cycles {
                assert_eq!(cycle.duration_frames, 100);
                assert_relative_eq!(cycle.swing_percent, 40.0);
                assert_relative_eq!(cycle.stance_percent, 60.0);
                assert_relative_eq!(cycle.double_support_1_percent, 10.0);
                assert_relative_eq!(cycle.double_support_2_percent, 10.0);
                assert_relative_eq!(cycle.toe_off_percent, 60.0);
            }
        }
    }
}

#[test]
fn timeline_alternates_sides() {
    let events = detect_events(&walking_markers(), Axis::Y, &EventParams::default());
    let timeline = Timeline::from_heel_strikes(&events.heel_strikes);
    let sides: Vec<Side> = timeline.events().iter().map(|e| e.side).collect();
    for pair in sides.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
    assert_eq!(timeline.len(), 10);
}

#[test]
fn toe_off_position_per_side() {
    let events = detect_events(&walking_markers(), Axis::Y, &EventParams::default());
    let left = toe_off_percentages(&events.heel_strikes.left, &events.toe_offs.left, 2);
    // The toe-off at 485 has no closing heel-strike.
    assert_eq!(left.values, vec![60.0; 4]);
    let summary = left.summary.unwrap();
    assert_relative_eq!(summary.mean, 60.0);
    assert_relative_eq!(summary.std, 0.0);

    let right = toe_off_percentages(&events.heel_strikes.right, &events.toe_offs.right, 2);
    assert_eq!(right.values.len(), 4);
}

//! Force-plate synchronization against a synthetic right-foot stance.

#![allow(clippy::unwrap_used, clippy::cast_precision_loss)]

use std::f64::consts::PI;

use approx::assert_relative_eq;
use gait_force::{ContactOnset, ForceError, ForceParams, synchronize};
use gait_types::{EventSet, ForceRecording, ForceSample, FrameTimes, RateSource, Side, SideMap};

/// Half-sine vertical force of 800 N from sample 750 to 1350, i.e. the right
/// foot landing at frame 75 and leaving at frame 135 of a 100 Hz capture.
fn recording(header_rate: Option<f64>) -> ForceRecording {
    let samples = (0..5000)
        .map(|i| {
            let fz = if (750..1350).contains(&i) {
                800.0 * (PI * (i - 750) as f64 / 600.0).sin()
            } else {
                0.0
            };
            ForceSample::new([0.05 * fz, -0.1 * fz, fz], [0.2, 0.001 * i as f64])
        })
        .collect();
    ForceRecording::new(header_rate, samples)
}

fn events(left: &[usize], right: &[usize]) -> SideMap<EventSet> {
    SideMap::new(
        EventSet::from_frames(left.to_vec()).unwrap(),
        EventSet::from_frames(right.to_vec()).unwrap(),
    )
}

fn heel_strikes() -> SideMap<EventSet> {
    events(&[25, 125, 225, 325, 425], &[75, 175, 275, 375, 475])
}

fn toe_offs() -> SideMap<EventSet> {
    events(&[85, 185, 285, 385, 485], &[35, 135, 235, 335, 435])
}

#[test]
fn right_stance_is_extracted() {
    let times = FrameTimes::uniform(100.0, 500);
    let cycle = synchronize(
        &recording(Some(1000.0)),
        &heel_strikes(),
        &toe_offs(),
        &times,
        &ForceParams::default(),
    )
    .unwrap();

    assert_eq!(cycle.side, Side::Right);
    assert_eq!(cycle.window.start, 755);
    assert_eq!(cycle.window.end, 1750);
    assert_eq!(cycle.window.toe_off, 1350);
    assert_eq!(cycle.sample_rate.source, RateSource::Header);
    assert_relative_eq!(cycle.camera_rate_hz, 100.0, epsilon = 1e-9);

    for channel in [&cycle.fz, &cycle.fx, &cycle.fy, &cycle.cop_x, &cycle.cop_y] {
        assert_eq!(channel.len(), 101);
    }
    assert!((0.0..=100.0).contains(&cycle.toe_off_percent));
    assert_relative_eq!(cycle.toe_off_percent, 595.0 / 994.0 * 100.0, epsilon = 1e-9);

    let peak = cycle.fz.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert!(peak > 700.0 && peak <= 800.0);
    assert_relative_eq!(*cycle.fz.last().unwrap(), 0.0);
    assert_relative_eq!(cycle.cop_x[50], 0.2);
}

#[test]
fn missing_header_rate_falls_back_to_default() {
    let times = FrameTimes::uniform(100.0, 500);
    let cycle = synchronize(
        &recording(None),
        &heel_strikes(),
        &toe_offs(),
        &times,
        &ForceParams::default(),
    )
    .unwrap();
    assert_eq!(cycle.sample_rate.source, RateSource::Default);
    assert_relative_eq!(cycle.sample_rate.hz, 1000.0);
}

#[test]
fn threshold_onset_finds_the_same_side() {
    let times = FrameTimes::uniform(100.0, 500);
    let params = ForceParams::default().onset(ContactOnset::AboveThreshold);
    let cycle = synchronize(&recording(Some(1000.0)), &heel_strikes(), &toe_offs(), &times, &params).unwrap();
    assert_eq!(cycle.side, Side::Right);
}

#[test]
fn contact_side_without_toe_offs_has_no_window() {
    let times = FrameTimes::uniform(100.0, 500);
    let toe_offs = events(&[85, 185], &[]);
    let err = synchronize(
        &recording(Some(1000.0)),
        &heel_strikes(),
        &toe_offs,
        &times,
        &ForceParams::default(),
    )
    .unwrap_err();
    assert_eq!(err, ForceError::NoValidWindow { side: Side::Right });
}

#[test]
fn contact_before_any_heel_strike_is_absent() {
    let times = FrameTimes::uniform(100.0, 500);
    let hs = events(&[125, 225], &[175, 275]);
    let err = synchronize(&recording(Some(1000.0)), &hs, &toe_offs(), &times, &ForceParams::default()).unwrap_err();
    assert!(matches!(err, ForceError::NoContactSide { .. }));
}

#[test]
fn degenerate_timestamps_are_absent() {
    let times = FrameTimes::new(vec![0.0; 500]);
    let err = synchronize(
        &recording(Some(1000.0)),
        &heel_strikes(),
        &toe_offs(),
        &times,
        &ForceParams::default(),
    )
    .unwrap_err();
    assert_eq!(err, ForceError::NoCameraRate);
}

#[test]
fn empty_recording_is_absent() {
    let times = FrameTimes::uniform(100.0, 500);
    let err = synchronize(
        &ForceRecording::default(),
        &heel_strikes(),
        &toe_offs(),
        &times,
        &ForceParams::default(),
    )
    .unwrap_err();
    assert_eq!(err, ForceError::EmptyRecording);
}

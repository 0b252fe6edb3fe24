//! Segmentation, resampling and aggregation on synthetic joint angles.

#![allow(clippy::unwrap_used, clippy::cast_precision_loss)]

use std::f64::consts::TAU;

use approx::assert_relative_eq;
use gait_cycles::{
    CycleParams, JointKinematics, MeanCurve, ResampleMethod, Resampler, aggregate_sides,
    segment_signal, segment_trial, summarize_sides,
};
use gait_types::{AngleSet, AngleSignal, EventSet, Joint, Plane, Segment, Side, SideMap};

/// Knee flexion shaped like one period per stride: 30° mean, 30° amplitude,
/// peaking at 70 % of each 100-frame stride starting at frame 25.
fn knee_signal(frames: usize) -> AngleSignal {
    AngleSignal::new(
        (0..frames)
            .map(|f| {
                let phase = (f as f64 - 25.0) / 100.0 - 0.7;
                [30.0 + 30.0 * (TAU * phase).cos(), 5.0 * (TAU * phase).sin(), 2.0]
            })
            .collect(),
    )
}

#[test]
fn windows_of_any_length_become_101_samples() {
    let signal = AngleSignal::new(vec![[1.0, 2.0, 3.0]; 800]);
    let hs = EventSet::from_frames(vec![0, 50, 151, 651]).unwrap();
    for method in [ResampleMethod::Fourier, ResampleMethod::Linear] {
        let mut resampler = Resampler::new(method, 101);
        let ensemble = segment_signal(&signal, &hs, Side::Left, Joint::Hip, &mut resampler);
        assert_eq!(ensemble.len(), 3);
        for cycle in &ensemble.cycles {
            assert_eq!(cycle.len(), 101);
            assert_relative_eq!(cycle.samples()[100][2], 3.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn fourier_cycles_preserve_amplitude() {
    let mut angles = AngleSet::default();
    angles.insert(Side::Right, Segment::Shank, knee_signal(500));
    let heel_strikes = SideMap::new(
        EventSet::empty(),
        EventSet::from_frames(vec![25, 125, 225, 325, 425]).unwrap(),
    );

    let ensembles = segment_trial(&angles, &heel_strikes, &CycleParams::default()).unwrap();
    let knee = ensembles.right.get(Joint::Knee);
    assert_eq!(knee.len(), 4);

    let sagittal = knee.cycles[0].plane(Plane::Sagittal);
    for (m, value) in sagittal.iter().enumerate() {
        let expected = 30.0 + 30.0 * (TAU * (m as f64 / 101.0 - 0.7)).cos();
        assert_relative_eq!(*value, expected, epsilon = 1e-6);
    }

    let summary = JointKinematics::summarize(knee, 2).unwrap();
    assert_eq!(summary.cycles, 4);
    assert_relative_eq!(summary.sagittal.peak_location.mean, 71.0);
    assert_relative_eq!(summary.sagittal.peak_location.std, 0.0);
    assert!(summary.sagittal.peak_value.mean > 59.9);
    assert!(summary.sagittal.range_of_motion.mean > 59.8);
}

#[test]
fn empty_side_is_absent_everywhere() {
    let mut angles = AngleSet::default();
    for side in Side::BOTH {
        for segment in Segment::ALL {
            angles.insert(side, segment, knee_signal(500));
        }
    }
    let heel_strikes = SideMap::new(
        EventSet::from_frames(vec![25, 125, 225]).unwrap(),
        EventSet::from_frames(vec![75]).unwrap(),
    );

    let ensembles = segment_trial(&angles, &heel_strikes, &CycleParams::linear()).unwrap();
    let kinematics = summarize_sides(&ensembles, 2);
    let curves = aggregate_sides(&ensembles);

    assert!(ensembles.right.iter().all(|e| e.is_empty()));
    assert!(kinematics.right.is_empty());
    assert!(curves.right.get(Joint::Ankle).is_none());

    assert_eq!(kinematics.left.joints.len(), 3);
    let hip = curves.left.get(Joint::Hip).unwrap();
    assert_eq!(hip.mean.len(), 101);
    assert_eq!(hip.cycles, 2);
}

#[test]
fn identical_strides_have_zero_spread() {
    let signal = knee_signal(500);
    let hs = EventSet::from_frames(vec![25, 125, 225, 325]).unwrap();
    let mut resampler = Resampler::new(ResampleMethod::Fourier, 101);
    let ensemble = segment_signal(&signal, &hs, Side::Left, Joint::Knee, &mut resampler);

    let curve = MeanCurve::aggregate(&ensemble).unwrap();
    for std in curve.plane_std(Plane::Sagittal) {
        assert!(std < 1e-6);
    }
    assert_relative_eq!(curve.plane_mean(Plane::Transverse)[40], 2.0, epsilon = 1e-9);
}

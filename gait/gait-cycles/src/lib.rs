//! Stride normalisation and joint-angle aggregation.
//!
//! Continuous segment-rotation signals are cut at consecutive heel-strikes
//! and resampled to a fixed-length cycle (0–100 % of stride):
//!
//! - [`Resampler`] - Fourier (default) or linear resampling to `n` points
//! - [`segment_trial`] - Hip, knee and ankle [`CycleEnsemble`]s per side
//! - [`KinematicSummary`] - Peak value, peak location and range of motion
//! - [`MeanCurve`] - Elementwise mean and std across strides
//!
//! A side with fewer than two heel-strikes produces empty ensembles, no
//! kinematic parameters and no curves; nothing is zero-filled.
//!
//! # Example
//!
//! ```
//! use gait_cycles::{CycleParams, MeanCurve, segment_trial};
//! use gait_types::{AngleSet, AngleSignal, EventSet, Joint, Segment, Side, SideMap};
//!
//! let mut angles = AngleSet::default();
//! angles.insert(Side::Left, Segment::Shank, AngleSignal::new(vec![[20.0, 1.0, 0.0]; 300]));
//!
//! let heel_strikes = SideMap::new(
//!     EventSet::from_frames(vec![20, 120, 220]).unwrap(),
//!     EventSet::from_frames(vec![70]).unwrap(),
//! );
//! let ensembles = segment_trial(&angles, &heel_strikes, &CycleParams::default()).unwrap();
//!
//! let knee = ensembles.left.get(Joint::Knee);
//! assert_eq!(knee.len(), 2);
//! assert!(MeanCurve::aggregate(ensembles.right.get(Joint::Knee)).is_none());
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod curves;
mod kinematics;
mod params;
mod resample;
mod segment;

pub use curves::{JointCurves, MeanCurve, aggregate_sides};
pub use kinematics::{
    CycleParameters, JointKinematics, KinematicSummary, PlaneKinematics, summarize_sides,
};
pub use params::CycleParams;
pub use resample::{ResampleMethod, Resampler, lerp, resample_fourier, resample_linear};
pub use segment::{Cycle, CycleEnsemble, JointEnsembles, segment_signal, segment_trial};

//! Data model for gait trial analysis.
//!
//! This crate provides the types shared by every stage of the gait pipeline:
//!
//! - [`Trajectory`] / [`MarkerSet`] - Named 3-axis marker positions per frame
//! - [`AngleSignal`] / [`AngleSet`] - Per-segment rotation signals (sagittal, frontal, transverse)
//! - [`FrameTimes`] - Per-frame timestamps of the motion-capture clock
//! - [`EventSet`] - Strictly increasing heel-strike or toe-off frames
//! - [`ForceRecording`] - Independently clocked force-plate samples
//! - [`BiomechanicalModel`] - Immutable marker labels and sign corrections
//! - [`MeanStd`] - Aggregated `(mean, std)` pairs
//!
//! # Sides and planes
//!
//! Per-side values are carried in a [`SideMap`], so left and right results
//! are always addressed by [`Side`] rather than by position.
//!
//! # Example
//!
//! ```
//! use gait_types::{EventSet, Side, SideMap};
//!
//! let heel_strikes = SideMap::new(
//!     EventSet::from_frames(vec![25, 125, 225]).unwrap(),
//!     EventSet::from_frames(vec![75, 175]).unwrap(),
//! );
//!
//! assert_eq!(heel_strikes[Side::Left].cycle_count(), 2);
//! assert_eq!(heel_strikes[Side::Right].cycle_count(), 1);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod angle;
mod error;
mod events;
mod force;
mod model;
mod side;
mod stats;
mod time;
mod trajectory;

pub use angle::{AngleSet, AngleSignal};
pub use error::{GaitError, GaitResult};
pub use events::EventSet;
pub use force::{ForceRecording, ForceSample, RateSource, SampleRate};
pub use model::{BiomechanicalModel, MarkerLabels};
pub use side::{Axis, Joint, Plane, Segment, Side, SideMap};
pub use stats::{MeanStd, round_to};
pub use time::FrameTimes;
pub use trajectory::{MarkerSet, Trajectory};

/// Number of samples in a time-normalised cycle (0–100 %).
pub const CYCLE_POINTS: usize = 101;

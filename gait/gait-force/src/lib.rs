//! Force-plate synchronization for gait trials.
//!
//! A force plate samples ground-reaction force on its own clock. This crate
//! aligns that clock with the motion-capture camera, decides which foot
//! landed on the plate and extracts one stance of force and centre of
//! pressure normalised to a 0-100 % grid.
//!
//! # Pipeline
//!
//! 1. [`suppress_unloaded`] zeroes vertical force below the contact threshold
//! 2. [`contact_onset`] finds the first loaded sample, and [`contact_side`]
//!    the side that struck most recently before it
//! 3. [`stance_window`] maps each stride of that side to force samples
//! 4. [`ForceCycle::extract`] resamples the first accepted window
//!
//! [`synchronize`] runs all of it. Any failure is returned as a
//! [`ForceError`] and callers report the force output as absent.
//!
//! # Example
//!
//! ```
//! use gait_force::{ForceParams, synchronize};
//! use gait_types::{EventSet, ForceRecording, ForceSample, FrameTimes, SideMap};
//!
//! let recording = ForceRecording::new(Some(1000.0), vec![ForceSample::default(); 5000]);
//! let hs = SideMap::new(EventSet::empty(), EventSet::empty());
//! let times = FrameTimes::uniform(100.0, 500);
//!
//! // An unloaded plate yields no force cycle.
//! assert!(synchronize(&recording, &hs, &hs, &times, &ForceParams::default()).is_err());
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod clock;
mod contact;
mod error;
mod params;
mod stance;
mod sync;

pub use clock::ClockMap;
pub use contact::{contact_onset, contact_side, suppress_unloaded};
pub use error::{ForceError, ForceResult};
pub use params::{ContactOnset, ForceParams};
pub use stance::{ForceCycle, StanceWindow, stance_window};
pub use sync::synchronize;

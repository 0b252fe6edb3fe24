//! Gait event detection and phase classification.
//!
//! This crate turns marker trajectories into discrete gait events:
//!
//! # Detection
//!
//! - [`select_axis`] - Dominant walking axis from pelvis excursion
//! - [`find_peaks`] - Prominence-filtered local maxima
//! - [`detect_heel_strikes`] / [`detect_toe_offs`] - Events from 1-D distances
//! - [`detect_events`] - Both event kinds for both sides of a [`MarkerSet`]
//!
//! # Phases
//!
//! - [`Timeline`] - All events merged chronologically and tagged by side/kind
//! - [`classify_phases`] - Per-cycle swing, stance and double-support percentages
//! - [`toe_off_percentages`] - Toe-off position within each enclosing stride
//!
//! # Example
//!
//! ```
//! use gait_events::find_peaks;
//!
//! // One large excursion and one below the 100 mm prominence floor.
//! let distance: Vec<f64> = (0..200)
//!     .map(|i| {
//!         let t = f64::from(i) / 100.0 * std::f64::consts::TAU;
//!         300.0 * t.sin() + if i > 150 { 40.0 } else { 0.0 }
//!     })
//!     .collect();
//! assert_eq!(find_peaks(&distance, 100.0), vec![25, 125]);
//! ```
//!
//! [`MarkerSet`]: gait_types::MarkerSet

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod axis;
mod detect;
mod params;
mod peaks;
mod phase;
mod timeline;
mod toe_off;

pub use axis::select_axis;
pub use detect::{GaitEvents, detect_events, detect_heel_strikes, detect_toe_offs};
pub use params::{EventParams, PhaseStrategy};
pub use peaks::{Peak, find_peaks, peaks_with_prominence};
pub use phase::{Alignment, PhaseCycle, SidePhases, aligned_phases, classify_phases, timeline_phases};
pub use timeline::{EventKind, TaggedEvent, Timeline};
pub use toe_off::{ToeOffPercent, toe_off_percentages};

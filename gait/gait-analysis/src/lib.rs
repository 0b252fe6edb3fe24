//! One-call analysis of a gait trial.
//!
//! [`analyze_trial`] takes a [`TrialInput`] (marker trajectories, segment
//! rotations, timestamps and optional force-plate data) and returns a
//! [`TrialReport`] holding every result:
//!
//! - Gait events, per-cycle phases and toe-off percentages
//! - Normalised hip, knee and ankle strides, their mean curves and
//!   kinematic parameters
//! - Spatiotemporal metrics and the global summary
//! - The force-plate stance cycle, or the reason it is absent
//!
//! Configuration problems abort the trial before any computation. A side
//! without cycles yields explicit empty results and force problems yield
//! [`ForceData::Absent`].
//!
//! # Example
//!
//! ```no_run
//! use gait_analysis::{AnalysisParams, TrialFiles, TrialInput, analyze_trial};
//! use gait_types::BiomechanicalModel;
//!
//! let files = TrialFiles {
//!     trc: "walk_dynamic.trc".into(),
//!     htr: "walk_dynamic.htr".into(),
//!     force: None,
//! };
//! let input = TrialInput::load(&files, BiomechanicalModel::cgm23()).unwrap();
//! let report = analyze_trial(&input, &AnalysisParams::default()).unwrap();
//! println!("{}", report.to_json(true).unwrap());
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod input;
mod params;
mod pipeline;
mod report;

pub use input::{ForceInput, TrialFiles, TrialInput};
pub use params::AnalysisParams;
pub use pipeline::analyze_trial;
pub use report::{ForceData, TrialReport};

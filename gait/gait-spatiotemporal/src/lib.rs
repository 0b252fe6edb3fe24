//! Spatiotemporal gait parameters.
//!
//! - [`compute_spatiotemporal`] - Stride and step length, base of support,
//!   stride and step time, and phase percentages per side
//! - [`global_summary`] - Distance, duration, speed, cadence and walk ratio
//!
//! Steps come from a chronological merge of both sides' heel-strikes; each
//! step is attributed to the foot that lands at its end. Every value is
//! reported as a rounded `(mean, std)` pair using the population standard
//! deviation.
//!
//! # Example
//!
//! ```
//! use gait_spatiotemporal::{FootPlacement, step_geometry};
//! use gait_types::Side;
//! use nalgebra::Point3;
//!
//! let at = |side, frame, x, y| FootPlacement { side, frame, position: Point3::new(x, y, 0.0) };
//! let placements = [
//!     at(Side::Left, 25, -100.0, 0.0),
//!     at(Side::Right, 75, 100.0, 500.0),
//!     at(Side::Left, 125, -100.0, 1000.0),
//! ];
//! let (steps, degenerate) = step_geometry(&placements);
//! assert_eq!(degenerate, 0);
//! assert_eq!(steps[0].side, Side::Right);
//! assert!((steps[0].base_of_support - 200.0).abs() < 1e-9);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod global;
mod params;
mod record;
mod steps;

pub use global::{GlobalSummary, global_summary};
pub use params::SpatiotemporalParams;
pub use record::{Metric, SpatiotemporalRecord, compute_spatiotemporal};
pub use steps::{
    FootPlacement, StepGeometry, StepTime, foot_placements, project_step, step_geometry,
    step_times, stride_lengths, stride_times,
};

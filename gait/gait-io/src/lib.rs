//! Trial file readers for gait analysis.
//!
//! - **TRC** - Marker trajectories and per-frame timestamps ([`load_trc`])
//! - **HTR** - Segment rotations of the thigh, shank and foot ([`load_angles`])
//! - **Force text** - Force-plate channels and sample rate ([`load_force`])
//!
//! Readers return the shared types of `gait-types`. A marker or segment the
//! biomechanical model requires but the file lacks is reported as a
//! configuration error ([`IoError::is_configuration`]).
//!
//! # Example
//!
//! ```no_run
//! use gait_io::{load_angles, load_trc};
//! use gait_types::BiomechanicalModel;
//!
//! let model = BiomechanicalModel::from_name("cgm23").unwrap();
//! let table = load_trc("walk_dynamic.trc", model.column_limit()).unwrap();
//! let markers = table.marker_set(&model).unwrap();
//! let angles = load_angles("walk_dynamic.htr").unwrap().corrected(&model);
//! assert_eq!(angles.get(gait_types::Side::Left, gait_types::Segment::Foot).len(), markers.frame_count());
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod force;
mod htr;
mod trc;

pub use error::{IoError, IoResult};
pub use force::{load_force, parse_force};
pub use htr::{angles_from_htr, load_angles, normalize_segment_name, parse_htr};
pub use trc::{MarkerTable, load_trc, parse_trc};

//! Inputs of one trial.

use std::path::{Path, PathBuf};

use gait_io::{IoResult, load_angles, load_force, load_trc};
use gait_types::{AngleSet, BiomechanicalModel, ForceRecording, FrameTimes, GaitResult, MarkerSet, Segment, Side};
use tracing::{info, warn};

/// Force-plate data supplied with a trial.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ForceInput {
    /// The trial has no force file.
    #[default]
    None,
    /// A parsed recording.
    Recording(ForceRecording),
    /// The force file exists but could not be read.
    Unreadable {
        /// Why reading failed.
        reason: String,
    },
}

/// Everything one trial analysis consumes.
///
/// Angles are expected sign-corrected for `model`; [`TrialInput::load`]
/// applies the correction.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialInput {
    /// Biomechanical model the markers and angles follow.
    pub model: BiomechanicalModel,
    /// Marker trajectories.
    pub markers: MarkerSet,
    /// Segment rotations.
    pub angles: AngleSet,
    /// Per-frame timestamps.
    pub times: FrameTimes,
    /// Optional force-plate data.
    pub force: ForceInput,
}

impl TrialInput {
    /// Checks that every input shares one frame index.
    ///
    /// Returns the number of frames.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an empty trial, a missing segment or
    /// mismatched lengths.
    pub fn validate(&self) -> GaitResult<usize> {
        let frames = self.markers.validate()?;
        self.angles.validate(frames)?;
        self.times.validate(frames)?;
        Ok(frames)
    }

    /// Reads a trial from its files.
    ///
    /// Marker rows dropped for missing values are dropped from the rotations
    /// too, so both stay on one frame index. A force file that cannot be read
    /// does not fail the load; it becomes [`ForceInput::Unreadable`].
    ///
    /// # Errors
    ///
    /// Returns an error if the marker or rotation file cannot be read or
    /// lacks what `model` requires.
    pub fn load(files: &TrialFiles, model: BiomechanicalModel) -> IoResult<Self> {
        let table = load_trc(&files.trc, model.column_limit())?;
        let markers = table.marker_set(&model)?;
        let mut angles = load_angles(&files.htr)?.corrected(&model);
        if table.has_gaps() && angle_frames(&angles) == table.data_rows() {
            warn!(
                dropped = table.data_rows() - table.len(),
                "Dropping rotation frames of incomplete marker rows"
            );
            angles = angles.select_frames(table.kept_rows());
        }
        let force = files.force.as_deref().map_or(ForceInput::None, read_force);

        info!(
            model = model.name(),
            frames = table.len(),
            force = !matches!(force, ForceInput::None),
            "Trial loaded"
        );
        Ok(Self {
            model,
            markers,
            angles,
            times: table.times(),
            force,
        })
    }
}

/// Paths of the files making up one trial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialFiles {
    /// TRC marker trajectories.
    pub trc: PathBuf,
    /// HTR segment rotations.
    pub htr: PathBuf,
    /// Optional force-plate recording.
    pub force: Option<PathBuf>,
}

fn angle_frames(angles: &AngleSet) -> usize {
    angles.get(Side::Left, Segment::Thigh).len()
}

fn read_force(path: &Path) -> ForceInput {
    match load_force(path) {
        Ok(recording) => ForceInput::Recording(recording),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "Force file unreadable");
            ForceInput::Unreadable {
                reason: err.to_string(),
            }
        }
    }
}

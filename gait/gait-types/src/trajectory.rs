//! Marker trajectories.

use nalgebra::Point3;

use crate::error::{GaitError, GaitResult};
use crate::side::{Axis, Side, SideMap};

/// A named 3-axis position time series, one sample per motion-capture frame.
///
/// Positions are in the marker coordinate unit of the capture system
/// (millimetres for the supported models).
///
/// # Example
///
/// ```
/// use gait_types::{Axis, Trajectory};
/// use nalgebra::Point3;
///
/// let pelvis = Trajectory::new(
///     "pelvis",
///     vec![Point3::new(0.0, 0.0, 900.0), Point3::new(5.0, 40.0, 905.0)],
/// );
///
/// assert_eq!(pelvis.len(), 2);
/// assert!((pelvis.excursion(Axis::Y) - 40.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    label: String,
    points: Vec<Point3<f64>>,
}

impl Trajectory {
    /// Creates a trajectory from its label and per-frame positions.
    #[must_use]
    pub fn new(label: impl Into<String>, points: Vec<Point3<f64>>) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }

    /// Marker label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Per-frame positions.
    #[must_use]
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the trajectory has no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Position at `frame`, if it exists.
    #[must_use]
    pub fn at(&self, frame: usize) -> Option<&Point3<f64>> {
        self.points.get(frame)
    }

    /// First position.
    #[must_use]
    pub fn first(&self) -> Option<&Point3<f64>> {
        self.points.first()
    }

    /// Last position.
    #[must_use]
    pub fn last(&self) -> Option<&Point3<f64>> {
        self.points.last()
    }

    /// The 1-D coordinate of every frame along `axis`.
    #[must_use]
    pub fn along(&self, axis: Axis) -> Vec<f64> {
        let i = axis.index();
        self.points.iter().map(|p| p[i]).collect()
    }

    /// Peak-to-peak excursion along `axis` (0 for an empty trajectory).
    #[must_use]
    pub fn excursion(&self, axis: Axis) -> f64 {
        let i = axis.index();
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for p in &self.points {
            min = min.min(p[i]);
            max = max.max(p[i]);
        }
        if max < min { 0.0 } else { max - min }
    }
}

/// The marker trajectories consumed by the pipeline, sharing one frame index.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSet {
    /// Heel markers.
    pub heel: SideMap<Trajectory>,
    /// Toe markers.
    pub toe: SideMap<Trajectory>,
    /// Ankle joint centres.
    pub ankle: SideMap<Trajectory>,
    /// Pelvis marker.
    pub pelvis: Trajectory,
}

impl MarkerSet {
    /// Number of frames, taken from the pelvis trajectory.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.pelvis.len()
    }

    /// Iterates over every trajectory of the set.
    pub fn trajectories(&self) -> impl Iterator<Item = &Trajectory> {
        Side::BOTH
            .into_iter()
            .flat_map(move |side| [&self.heel[side], &self.toe[side], &self.ankle[side]])
            .chain(std::iter::once(&self.pelvis))
    }

    /// Checks that the set is non-empty and every trajectory has the same length.
    ///
    /// # Errors
    ///
    /// Returns [`GaitError::EmptyTrial`] for zero frames and
    /// [`GaitError::LengthMismatch`] naming the first inconsistent marker.
    pub fn validate(&self) -> GaitResult<usize> {
        let frames = self.frame_count();
        if frames == 0 {
            return Err(GaitError::EmptyTrial);
        }
        for trajectory in self.trajectories() {
            if trajectory.len() != frames {
                return Err(GaitError::length_mismatch(
                    trajectory.label(),
                    frames,
                    trajectory.len(),
                ));
            }
        }
        Ok(frames)
    }
}

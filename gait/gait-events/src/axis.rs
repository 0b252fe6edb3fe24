//! Walking-axis selection.

use gait_types::{Axis, Trajectory};
use tracing::debug;

/// Picks the horizontal axis along which the pelvis travels furthest.
///
/// Returns [`Axis::Y`] when the Y excursion is strictly larger, otherwise
/// [`Axis::X`] (including exact ties).
///
/// # Example
///
/// ```
/// use gait_events::select_axis;
/// use gait_types::{Axis, Trajectory};
/// use nalgebra::Point3;
///
/// let pelvis = Trajectory::new(
///     "pelvis",
///     vec![Point3::new(0.0, 0.0, 950.0), Point3::new(30.0, 1200.0, 950.0)],
/// );
/// assert_eq!(select_axis(&pelvis), Axis::Y);
/// ```
#[must_use]
pub fn select_axis(pelvis: &Trajectory) -> Axis {
    let x = pelvis.excursion(Axis::X);
    let y = pelvis.excursion(Axis::Y);
    let axis = if y > x { Axis::Y } else { Axis::X };
    debug!(x_excursion = x, y_excursion = y, %axis, "Selected walking axis");
    axis
}

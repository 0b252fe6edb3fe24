//! Contact thresholding, onset detection and contact-side selection.

use gait_types::{EventSet, ForceSample, Side, SideMap};

use crate::params::ContactOnset;

/// Zeroes the vertical force of every sample below `threshold`.
///
/// Shear forces and the centre of pressure are left untouched.
#[must_use]
pub fn suppress_unloaded(samples: &[ForceSample], threshold: f64) -> Vec<ForceSample> {
    samples
        .iter()
        .map(|s| {
            let mut sample = *s;
            if !sample.is_loaded(threshold) {
                sample.force[2] = 0.0;
            }
            sample
        })
        .collect()
}

/// First sample of foot contact in a thresholded vertical-force series.
#[must_use]
pub fn contact_onset(fz: &[f64], onset: ContactOnset, threshold: f64) -> Option<usize> {
    match onset {
        ContactOnset::FirstLoaded => fz.iter().position(|&f| f > 0.0),
        ContactOnset::AboveThreshold => fz.iter().position(|&f| f > threshold),
    }
}

/// The side whose latest heel-strike at or before `frame` is the more recent.
///
/// Returns `None` when neither side has struck yet or both struck together.
///
/// # Example
///
/// ```
/// use gait_force::contact_side;
/// use gait_types::{EventSet, Side, SideMap};
///
/// let hs = SideMap::new(
///     EventSet::from_frames(vec![25, 125]).unwrap(),
///     EventSet::from_frames(vec![75, 175]).unwrap(),
/// );
/// assert_eq!(contact_side(76, &hs), Some(Side::Right));
/// assert_eq!(contact_side(130, &hs), Some(Side::Left));
/// assert_eq!(contact_side(10, &hs), None);
/// ```
#[must_use]
pub fn contact_side(frame: usize, heel_strikes: &SideMap<EventSet>) -> Option<Side> {
    let left = heel_strikes.left.last_at_or_before(frame);
    let right = heel_strikes.right.last_at_or_before(frame);
    match (left, right) {
        (Some(l), Some(r)) if l > r => Some(Side::Left),
        (Some(l), Some(r)) if r > l => Some(Side::Right),
        (Some(_), None) => Some(Side::Left),
        (None, Some(_)) => Some(Side::Right),
        _ => None,
    }
}

//! Toe-off position within each enclosing stride.

use gait_types::{EventSet, MeanStd, round_to};
use serde::{Deserialize, Serialize};

/// Toe-off positions of one side, percent of the enclosing stride.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToeOffPercent {
    /// One value per toe-off that has a heel-strike on each side of it.
    pub values: Vec<f64>,
    /// Mean and population std of `values`, absent when there are none.
    pub summary: Option<MeanStd>,
}

/// Locates every toe-off inside its enclosing same-side stride.
///
/// A toe-off is used only when a heel-strike at or before it and a
/// heel-strike after it both exist. Values are rounded to `decimals`.
///
/// # Example
///
/// ```
/// use gait_events::toe_off_percentages;
/// use gait_types::EventSet;
///
/// let hs = EventSet::from_frames(vec![25, 125, 225]).unwrap();
/// let to = EventSet::from_frames(vec![10, 85, 185, 250]).unwrap();
/// let result = toe_off_percentages(&hs, &to, 2);
/// assert_eq!(result.values, vec![60.0, 60.0]);
/// ```
#[must_use]
pub fn toe_off_percentages(heel_strikes: &EventSet, toe_offs: &EventSet, decimals: u32) -> ToeOffPercent {
    let values: Vec<f64> = toe_offs
        .frames()
        .iter()
        .filter_map(|&to| {
            let before = heel_strikes.last_at_or_before(to)?;
            let after = heel_strikes.first_between(to, usize::MAX)?;
            #[allow(clippy::cast_precision_loss)]
            let percent = (to - before) as f64 / (after - before) as f64 * 100.0;
            Some(round_to(percent, decimals))
        })
        .collect();

    let summary = MeanStd::population(&values).map(|s| s.rounded(decimals));
    ToeOffPercent { values, summary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rounds_each_value() {
        let hs = EventSet::from_frames(vec![0, 3]).unwrap();
        let to = EventSet::from_frames(vec![2]).unwrap();
        let result = toe_off_percentages(&hs, &to, 2);
        assert_relative_eq!(result.values[0], 66.67);
    }

    #[test]
    fn summary_over_values() {
        let hs = EventSet::from_frames(vec![0, 100, 200]).unwrap();
        let to = EventSet::from_frames(vec![60, 164]).unwrap();
        let result = toe_off_percentages(&hs, &to, 2);
        let summary = result.summary.unwrap();
        assert_relative_eq!(summary.mean, 62.0);
        assert_relative_eq!(summary.std, 2.0);
    }

    #[test]
    fn no_enclosing_stride() {
        let hs = EventSet::from_frames(vec![50]).unwrap();
        let to = EventSet::from_frames(vec![10, 80]).unwrap();
        let result = toe_off_percentages(&hs, &to, 2);
        assert!(result.values.is_empty());
        assert!(result.summary.is_none());
    }
}

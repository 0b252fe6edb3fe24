//! Prominence-filtered local maxima.
//!
//! A sample is a local maximum when it is strictly greater than its left
//! neighbour and the first differing sample to its right; flat tops report
//! their midpoint. The prominence of a peak is its height above the higher of
//! the two lowest points reached on either side before meeting a higher
//! sample (or the signal edge). End samples are never peaks.

/// A detected peak.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Sample index.
    pub index: usize,
    /// Height above the higher of its two bases.
    pub prominence: f64,
}

/// Finds the local maxima of `signal` whose prominence is at least
/// `min_prominence`, in ascending index order.
///
/// # Example
///
/// ```
/// use gait_events::find_peaks;
///
/// let signal = [0.0, 5.0, 0.0, 200.0, 0.0, 1.0, 0.0];
/// assert_eq!(find_peaks(&signal, 100.0), vec![3]);
/// assert_eq!(find_peaks(&signal, 1.0), vec![1, 3, 5]);
/// ```
#[must_use]
pub fn find_peaks(signal: &[f64], min_prominence: f64) -> Vec<usize> {
    peaks_with_prominence(signal)
        .into_iter()
        .filter(|peak| peak.prominence >= min_prominence)
        .map(|peak| peak.index)
        .collect()
}

/// Every local maximum of `signal` with its prominence.
#[must_use]
pub fn peaks_with_prominence(signal: &[f64]) -> Vec<Peak> {
    local_maxima(signal)
        .into_iter()
        .map(|index| Peak {
            index,
            prominence: prominence(signal, index),
        })
        .collect()
}

#[allow(clippy::float_cmp)]
fn local_maxima(x: &[f64]) -> Vec<usize> {
    let mut peaks = Vec::new();
    if x.len() < 3 {
        return peaks;
    }
    let last = x.len() - 1;
    let mut i = 1;
    while i < last {
        if x[i - 1] < x[i] {
            // Walk across a possible plateau.
            let mut ahead = i + 1;
            while ahead < last && x[ahead] == x[i] {
                ahead += 1;
            }
            if x[ahead] < x[i] {
                peaks.push((i + ahead - 1) / 2);
                i = ahead;
            }
        }
        i += 1;
    }
    peaks
}

fn prominence(x: &[f64], peak: usize) -> f64 {
    let height = x[peak];

    let mut left_min = height;
    for &v in x[..=peak].iter().rev() {
        if v > height {
            break;
        }
        left_min = left_min.min(v);
    }

    let mut right_min = height;
    for &v in &x[peak..] {
        if v > height {
            break;
        }
        right_min = right_min.min(v);
    }

    height - left_min.max(right_min)
}

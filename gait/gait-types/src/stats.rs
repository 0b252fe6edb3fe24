//! Summary statistics.

use serde::{Deserialize, Serialize};

/// A `(mean, std)` pair aggregated over cycles or steps.
///
/// # Example
///
/// ```
/// use gait_types::MeanStd;
///
/// let pop = MeanStd::population(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert!((pop.mean - 2.5).abs() < 1e-12);
/// assert!((pop.std - 1.25_f64.sqrt()).abs() < 1e-12);
///
/// assert!(MeanStd::population(&[]).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanStd {
    /// Arithmetic mean.
    pub mean: f64,
    /// Standard deviation.
    pub std: f64,
}

impl MeanStd {
    /// Creates a pair.
    #[must_use]
    pub const fn new(mean: f64, std: f64) -> Self {
        Self { mean, std }
    }

    /// Mean and population standard deviation (divisor `n`).
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn population(values: &[f64]) -> Option<Self> {
        let (mean, sum_sq) = moments(values)?;
        #[allow(clippy::cast_precision_loss)]
        let n = values.len() as f64;
        Some(Self::new(mean, (sum_sq / n).sqrt()))
    }

    /// Mean and sample standard deviation (divisor `n - 1`).
    ///
    /// A single value has a standard deviation of 0. Returns `None` for an
    /// empty slice.
    #[must_use]
    pub fn sample(values: &[f64]) -> Option<Self> {
        let (mean, sum_sq) = moments(values)?;
        if values.len() < 2 {
            return Some(Self::new(mean, 0.0));
        }
        #[allow(clippy::cast_precision_loss)]
        let dof = (values.len() - 1) as f64;
        Some(Self::new(mean, (sum_sq / dof).sqrt()))
    }

    /// Both values rounded to `decimals` decimal digits.
    #[must_use]
    pub fn rounded(self, decimals: u32) -> Self {
        Self::new(round_to(self.mean, decimals), round_to(self.std, decimals))
    }
}

/// Returns `(mean, sum of squared deviations)`.
fn moments(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let sum_sq = values.iter().map(|v| (v - mean).powi(2)).sum();
    Some((mean, sum_sq))
}

/// Rounds `value` to `decimals` decimal digits.
///
/// # Example
///
/// ```
/// use gait_types::round_to;
///
/// assert!((round_to(1.23456, 2) - 1.23).abs() < 1e-12);
/// assert!((round_to(-0.005001, 2) + 0.01).abs() < 1e-12);
/// ```
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10_f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sample_std() {
        let s = MeanStd::sample(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_relative_eq!(s.mean, 5.0);
        assert_relative_eq!(s.std, (32.0_f64 / 7.0).sqrt());
    }

    #[test]
    fn single_value() {
        let s = MeanStd::sample(&[3.5]).unwrap();
        assert_relative_eq!(s.mean, 3.5);
        assert_relative_eq!(s.std, 0.0);

        let p = MeanStd::population(&[3.5]).unwrap();
        assert_relative_eq!(p.std, 0.0);
    }

    #[test]
    fn empty_is_absent() {
        assert!(MeanStd::sample(&[]).is_none());
        assert!(MeanStd::population(&[]).is_none());
    }

    #[test]
    fn rounding() {
        let r = MeanStd::new(59.996, 0.12345).rounded(2);
        assert_relative_eq!(r.mean, 60.0);
        assert_relative_eq!(r.std, 0.12);
    }
}

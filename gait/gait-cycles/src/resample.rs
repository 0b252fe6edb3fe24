//! Fixed-length resampling of variable-length stride windows.
//!
//! The Fourier method treats the window as one period of a periodic signal:
//! the spectrum is truncated or zero-padded to the target length and
//! transformed back, so output sample `m` sits at input position
//! `m * n / points`. The linear method spans both window endpoints instead.

use std::fmt;

use gait_types::{GaitError, GaitResult};
use rustfft::FftPlanner;
use rustfft::num_complex::Complex;
use serde::{Deserialize, Serialize};

/// How a window is brought to a fixed number of samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResampleMethod {
    /// Band-limited (spectral) interpolation.
    #[default]
    Fourier,

    /// Piecewise-linear interpolation from the first to the last sample.
    Linear,
}

/// Resamples windows to a fixed length, reusing FFT plans across calls.
///
/// # Example
///
/// ```
/// use gait_cycles::{ResampleMethod, Resampler};
///
/// let mut resampler = Resampler::new(ResampleMethod::Fourier, 101);
/// let out = resampler.resample(&[2.0; 37]).unwrap();
/// assert_eq!(out.len(), 101);
/// assert!(out.iter().all(|v| (v - 2.0).abs() < 1e-9));
/// ```
pub struct Resampler {
    method: ResampleMethod,
    points: usize,
    planner: FftPlanner<f64>,
}

impl fmt::Debug for Resampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resampler")
            .field("method", &self.method)
            .field("points", &self.points)
            .finish_non_exhaustive()
    }
}

impl Resampler {
    /// Creates a resampler producing `points` samples per window.
    #[must_use]
    pub fn new(method: ResampleMethod, points: usize) -> Self {
        Self {
            method,
            points,
            planner: FftPlanner::new(),
        }
    }

    /// The resampling method.
    #[must_use]
    pub const fn method(&self) -> ResampleMethod {
        self.method
    }

    /// Output length.
    #[must_use]
    pub const fn points(&self) -> usize {
        self.points
    }

    /// Resamples one series.
    ///
    /// # Errors
    ///
    /// Returns [`GaitError::DegenerateCycle`] for an empty window.
    pub fn resample(&mut self, signal: &[f64]) -> GaitResult<Vec<f64>> {
        if signal.is_empty() {
            return Err(GaitError::degenerate("empty window cannot be resampled"));
        }
        Ok(match self.method {
            ResampleMethod::Fourier => self.fourier(signal),
            ResampleMethod::Linear => resample_linear(signal, self.points),
        })
    }

    /// Resamples every column of a 3-column window.
    ///
    /// # Errors
    ///
    /// Returns [`GaitError::DegenerateCycle`] for an empty window.
    pub fn resample_columns(&mut self, window: &[[f64; 3]]) -> GaitResult<Vec<[f64; 3]>> {
        let mut columns = [Vec::new(), Vec::new(), Vec::new()];
        for (i, column) in columns.iter_mut().enumerate() {
            let series: Vec<f64> = window.iter().map(|s| s[i]).collect();
            *column = self.resample(&series)?;
        }
        Ok((0..self.points)
            .map(|m| [columns[0][m], columns[1][m], columns[2][m]])
            .collect())
    }

    fn fourier(&mut self, signal: &[f64]) -> Vec<f64> {
        let nx = signal.len();
        let num = self.points;
        if num == 0 {
            return Vec::new();
        }

        let mut spectrum: Vec<Complex<f64>> = signal.iter().map(|&x| Complex::new(x, 0.0)).collect();
        self.planner.plan_fft_forward(nx).process(&mut spectrum);

        // Keep the non-negative frequencies both lengths share.
        let shared = num.min(nx);
        let kept = shared / 2 + 1;
        let mut full = vec![Complex::new(0.0, 0.0); num];
        full[..kept].copy_from_slice(&spectrum[..kept]);

        // An even shared length has a Nyquist bin that is split between the
        // positive and negative halves of the other spectrum.
        if shared % 2 == 0 {
            let nyquist = shared / 2;
            if num < nx {
                full[nyquist] *= 2.0;
            } else if num > nx {
                full[nyquist] *= 0.5;
            }
        }

        // Hermitian completion of a real signal.
        full[0].im = 0.0;
        if num % 2 == 0 {
            full[num / 2].im = 0.0;
        }
        for k in 1..num.div_ceil(2) {
            full[num - k] = full[k].conj();
        }

        self.planner.plan_fft_inverse(num).process(&mut full);

        #[allow(clippy::cast_precision_loss)]
        let scale = nx as f64;
        full.iter().map(|c| c.re / scale).collect()
    }
}

/// Band-limited resampling of `signal` to `points` samples.
///
/// # Errors
///
/// Returns [`GaitError::DegenerateCycle`] for an empty window.
pub fn resample_fourier(signal: &[f64], points: usize) -> GaitResult<Vec<f64>> {
    Resampler::new(ResampleMethod::Fourier, points).resample(signal)
}

/// Linear resampling of `signal` to `points` samples spanning both ends.
///
/// A single-sample signal is repeated. An empty signal yields no samples.
///
/// # Example
///
/// ```
/// use gait_cycles::resample_linear;
///
/// assert_eq!(resample_linear(&[0.0, 10.0], 3), vec![0.0, 5.0, 10.0]);
/// ```
#[must_use]
pub fn resample_linear(signal: &[f64], points: usize) -> Vec<f64> {
    match (signal, points) {
        ([], _) | (_, 0) => Vec::new(),
        ([only], _) => vec![*only; points],
        (_, 1) => vec![signal[0]],
        _ => {
            let last = signal.len() - 1;
            #[allow(clippy::cast_precision_loss)]
            let step = last as f64 / (points - 1) as f64;
            (0..points)
                .map(|m| {
                    #[allow(clippy::cast_precision_loss)]
                    let position = m as f64 * step;
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let below = (position.floor() as usize).min(last - 1);
                    #[allow(clippy::cast_precision_loss)]
                    let t = position - below as f64;
                    lerp(signal[below], signal[below + 1], t)
                })
                .collect()
        }
    }
}

/// Linear interpolation between `a` and `b`.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    t.mul_add(b - a, a)
}

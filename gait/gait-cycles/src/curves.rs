//! Ensemble mean and standard-deviation curves.

use gait_types::{Joint, Plane, SideMap};
use serde::{Deserialize, Serialize};

use crate::segment::{CycleEnsemble, JointEnsembles};

/// Elementwise mean and population std of an ensemble, per plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeanCurve {
    /// Strides aggregated.
    pub cycles: usize,
    /// Mean `[sagittal, frontal, transverse]` per normalised sample.
    pub mean: Vec<[f64; 3]>,
    /// Standard deviation per normalised sample.
    pub std: Vec<[f64; 3]>,
}

impl MeanCurve {
    /// Aggregates `ensemble`. Returns `None` when it holds no strides.
    ///
    /// # Example
    ///
    /// ```
    /// use gait_cycles::{Cycle, CycleEnsemble, MeanCurve};
    /// use gait_types::{Joint, Side};
    ///
    /// let mut ensemble = CycleEnsemble::empty(Side::Left, Joint::Hip);
    /// assert!(MeanCurve::aggregate(&ensemble).is_none());
    ///
    /// ensemble.cycles.push(Cycle::new(0, 100, vec![[1.0, 2.0, 3.0]; 101]));
    /// ensemble.cycles.push(Cycle::new(100, 200, vec![[3.0, 2.0, 1.0]; 101]));
    /// let curve = MeanCurve::aggregate(&ensemble).unwrap();
    /// assert_eq!(curve.mean[50], [2.0, 2.0, 2.0]);
    /// assert_eq!(curve.std[50], [1.0, 0.0, 1.0]);
    /// ```
    #[must_use]
    pub fn aggregate(ensemble: &CycleEnsemble) -> Option<Self> {
        let points = ensemble.cycles.iter().map(|c| c.len()).min()?;
        #[allow(clippy::cast_precision_loss)]
        let n = ensemble.len() as f64;

        let mut mean = vec![[0.0; 3]; points];
        for cycle in &ensemble.cycles {
            for (acc, sample) in mean.iter_mut().zip(cycle.samples()) {
                for (a, s) in acc.iter_mut().zip(sample) {
                    *a += s;
                }
            }
        }
        for acc in &mut mean {
            for v in acc.iter_mut() {
                *v /= n;
            }
        }

        let mut std = vec![[0.0; 3]; points];
        for cycle in &ensemble.cycles {
            for ((acc, sample), m) in std.iter_mut().zip(cycle.samples()).zip(&mean) {
                for ((a, s), m) in acc.iter_mut().zip(sample).zip(m) {
                    *a += (s - m).powi(2);
                }
            }
        }
        for acc in &mut std {
            for v in acc.iter_mut() {
                *v = (*v / n).sqrt();
            }
        }

        Some(Self {
            cycles: ensemble.len(),
            mean,
            std,
        })
    }

    /// Mean curve of one plane.
    #[must_use]
    pub fn plane_mean(&self, plane: Plane) -> Vec<f64> {
        self.mean.iter().map(|s| s[plane.index()]).collect()
    }

    /// Std curve of one plane.
    #[must_use]
    pub fn plane_std(&self, plane: Plane) -> Vec<f64> {
        self.std.iter().map(|s| s[plane.index()]).collect()
    }
}

/// Mean curves of the hip, knee and ankle of one side. A joint without
/// strides has no curve.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JointCurves {
    /// Hip curve.
    pub hip: Option<MeanCurve>,
    /// Knee curve.
    pub knee: Option<MeanCurve>,
    /// Ankle curve.
    pub ankle: Option<MeanCurve>,
}

impl JointCurves {
    /// Aggregates every joint ensemble of one side.
    #[must_use]
    pub fn from_ensembles(ensembles: &JointEnsembles) -> Self {
        Self {
            hip: MeanCurve::aggregate(&ensembles.hip),
            knee: MeanCurve::aggregate(&ensembles.knee),
            ankle: MeanCurve::aggregate(&ensembles.ankle),
        }
    }

    /// The curve of `joint`, if it had strides.
    #[must_use]
    pub const fn get(&self, joint: Joint) -> Option<&MeanCurve> {
        match joint {
            Joint::Hip => self.hip.as_ref(),
            Joint::Knee => self.knee.as_ref(),
            Joint::Ankle => self.ankle.as_ref(),
        }
    }
}

/// Mean curves of both sides.
#[must_use]
pub fn aggregate_sides(ensembles: &SideMap<JointEnsembles>) -> SideMap<JointCurves> {
    ensembles.map_ref(|_, e| JointCurves::from_ensembles(e))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::cast_precision_loss)]
mod tests {
    use super::*;
    use crate::segment::Cycle;
    use approx::assert_relative_eq;
    use gait_types::Side;

    #[test]
    fn single_stride_mean_is_the_stride() {
        let samples: Vec<[f64; 3]> = (0..101).map(|i| [i as f64, (i as f64).sin(), -2.0]).collect();
        let mut ensemble = CycleEnsemble::empty(Side::Right, Joint::Knee);
        ensemble.cycles.push(Cycle::new(10, 110, samples.clone()));

        let curve = MeanCurve::aggregate(&ensemble).unwrap();
        assert_eq!(curve.cycles, 1);
        assert_eq!(curve.mean, samples);
        assert!(curve.std.iter().all(|s| s == &[0.0; 3]));
    }

    #[test]
    fn population_std_across_strides() {
        let mut ensemble = CycleEnsemble::empty(Side::Left, Joint::Ankle);
        for value in [1.0, 2.0, 3.0, 4.0] {
            ensemble.cycles.push(Cycle::new(0, 1, vec![[value, 0.0, 0.0]; 101]));
        }
        let curve = MeanCurve::aggregate(&ensemble).unwrap();
        assert_relative_eq!(curve.plane_mean(Plane::Sagittal)[0], 2.5);
        assert_relative_eq!(curve.plane_std(Plane::Sagittal)[100], 1.25_f64.sqrt());
    }

    #[test]
    fn absent_curves_serialize_as_null() {
        let curves = JointCurves::default();
        let json = serde_json::to_value(&curves).unwrap();
        assert!(json["hip"].is_null());
        assert!(curves.get(Joint::Knee).is_none());
    }
}

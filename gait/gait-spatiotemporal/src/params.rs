//! Parameters for spatiotemporal metrics.

use serde::{Deserialize, Serialize};

/// Parameters for spatiotemporal and global metrics.
///
/// # Example
///
/// ```
/// use gait_spatiotemporal::SpatiotemporalParams;
///
/// let params = SpatiotemporalParams::default().decimals(3);
/// assert_eq!(params.decimals, 3);
/// assert!((params.metres_per_unit - 0.001).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpatiotemporalParams {
    /// Decimal digits kept in reported values.
    pub decimals: u32,

    /// Metres per trajectory unit, used for the walked distance.
    pub metres_per_unit: f64,
}

impl Default for SpatiotemporalParams {
    fn default() -> Self {
        Self {
            decimals: 2,
            metres_per_unit: 0.001,
        }
    }
}

impl SpatiotemporalParams {
    /// Set the number of decimal digits kept.
    #[must_use]
    pub const fn decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Set the trajectory unit in metres.
    #[must_use]
    pub const fn metres_per_unit(mut self, metres: f64) -> Self {
        self.metres_per_unit = metres;
        self
    }
}

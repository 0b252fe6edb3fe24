//! Parameters for event detection and phase classification.

use serde::{Deserialize, Serialize};

/// How per-cycle gait phases are derived from the four event streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStrategy {
    /// Walk one chronologically merged, tagged event timeline and read every
    /// phase boundary from the events inside each stride.
    #[default]
    Timeline,

    /// Pick one of four fixed index alignments from whichever stream holds
    /// the earliest event of the trial, and apply it to every cycle.
    GlobalAlignment,
}

/// Parameters for heel-strike and toe-off detection.
///
/// # Example
///
/// ```
/// use gait_events::{EventParams, PhaseStrategy};
///
/// let params = EventParams::default()
///     .min_prominence(80.0)
///     .phase_strategy(PhaseStrategy::GlobalAlignment);
/// assert!((params.min_prominence - 80.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventParams {
    /// Minimum peak prominence of a marker-to-pelvis distance signal, in
    /// marker units (millimetres). Smaller peaks are rejected as noise.
    pub min_prominence: f64,

    /// Phase classification strategy.
    pub phase_strategy: PhaseStrategy,

    /// Decimal digits kept for per-cycle percentages.
    pub decimals: u32,
}

impl Default for EventParams {
    fn default() -> Self {
        Self {
            min_prominence: 100.0,
            phase_strategy: PhaseStrategy::Timeline,
            decimals: 2,
        }
    }
}

impl EventParams {
    /// Set the minimum peak prominence.
    #[must_use]
    pub const fn min_prominence(mut self, prominence: f64) -> Self {
        self.min_prominence = prominence;
        self
    }

    /// Set the phase classification strategy.
    #[must_use]
    pub const fn phase_strategy(mut self, strategy: PhaseStrategy) -> Self {
        self.phase_strategy = strategy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = EventParams::default();
        assert!((params.min_prominence - 100.0).abs() < f64::EPSILON);
        assert_eq!(params.phase_strategy, PhaseStrategy::Timeline);
        assert_eq!(params.decimals, 2);
    }
}

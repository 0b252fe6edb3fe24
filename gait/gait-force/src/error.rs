//! Error types for force-plate synchronization.

use gait_types::Side;
use thiserror::Error;

/// Reasons a trial yields no force cycle.
///
/// None of these abort a trial; the caller reports the force output as
/// absent with the error as the reason.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForceError {
    /// The recording holds no samples.
    #[error("force recording is empty")]
    EmptyRecording,

    /// The camera frame rate could not be derived from the timestamps.
    #[error("camera frame rate unavailable from timestamps")]
    NoCameraRate,

    /// A sample rate is not a positive finite number.
    #[error("invalid {clock} rate: {hz}")]
    InvalidRate {
        /// Which clock.
        clock: &'static str,
        /// Offending rate.
        hz: f64,
    },

    /// Vertical force never reaches the contact criterion.
    #[error("no foot contact found in force recording")]
    NoContact,

    /// No heel-strike precedes the contact onset.
    #[error("no heel-strike precedes contact at frame {frame}")]
    NoContactSide {
        /// Camera frame of the contact onset.
        frame: usize,
    },

    /// A stride window was rejected.
    #[error("stance window {start}..{end} rejected: {reason}")]
    WindowRejected {
        /// First camera frame of the window.
        start: usize,
        /// Last camera frame of the window (exclusive).
        end: usize,
        /// Why it was rejected.
        reason: String,
    },

    /// No stride of the contact side yields an acceptable window.
    #[error("no valid stance window on the {side} side")]
    NoValidWindow {
        /// The contact side.
        side: Side,
    },

    /// Invalid configuration.
    #[error("invalid force parameters: {0}")]
    InvalidParams(String),
}

impl ForceError {
    /// Creates an invalid rate error.
    #[must_use]
    pub const fn invalid_rate(clock: &'static str, hz: f64) -> Self {
        Self::InvalidRate { clock, hz }
    }

    /// Creates a window rejection.
    #[must_use]
    pub fn window_rejected(start: usize, end: usize, reason: impl Into<String>) -> Self {
        Self::WindowRejected {
            start,
            end,
            reason: reason.into(),
        }
    }

    /// Creates an invalid parameters error.
    #[must_use]
    pub fn invalid_params(reason: impl Into<String>) -> Self {
        Self::InvalidParams(reason.into())
    }
}

/// Result type for force-plate operations.
pub type ForceResult<T> = std::result::Result<T, ForceError>;

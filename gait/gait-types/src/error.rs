//! Error types for gait trial analysis.

use thiserror::Error;

/// Errors raised while validating or processing a gait trial.
///
/// Configuration errors (`UnknownModel`, `MissingMarker`, `MissingSegment`,
/// `LengthMismatch`, `EmptyTrial`, `InvalidParams`) abort a trial before any
/// computation starts. `DegenerateCycle` is raised by per-cycle arithmetic
/// and is absorbed by the stage that produced it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GaitError {
    /// The requested biomechanical model is not known.
    #[error("unknown biomechanical model: {0}")]
    UnknownModel(String),

    /// A marker required by the model is missing from the input.
    #[error("missing marker: {0}")]
    MissingMarker(String),

    /// A body segment required by the pipeline is missing from the input.
    #[error("missing segment: {0}")]
    MissingSegment(String),

    /// Two inputs that must share one frame index have different lengths.
    #[error("length mismatch for {what}: expected {expected} frames, got {actual}")]
    LengthMismatch {
        /// Which input was inconsistent.
        what: String,
        /// Expected number of frames.
        expected: usize,
        /// Actual number of frames.
        actual: usize,
    },

    /// The trial has no frames.
    #[error("trial contains no frames")]
    EmptyTrial,

    /// Event frames are not strictly increasing.
    #[error("event frames must be strictly increasing (frame {frame} follows {previous})")]
    UnorderedEvents {
        /// The offending frame.
        frame: usize,
        /// The frame preceding it.
        previous: usize,
    },

    /// Invalid analysis parameters.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// A cycle or segment has zero length and cannot be normalised.
    #[error("degenerate cycle: {context}")]
    DegenerateCycle {
        /// Where the zero-length window was met.
        context: String,
    },
}

impl GaitError {
    /// Creates a length mismatch error.
    #[must_use]
    pub fn length_mismatch(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            what: what.into(),
            expected,
            actual,
        }
    }

    /// Creates an invalid parameters error.
    #[must_use]
    pub fn invalid_params(details: impl Into<String>) -> Self {
        Self::InvalidParams(details.into())
    }

    /// Creates a degenerate cycle error.
    #[must_use]
    pub fn degenerate(context: impl Into<String>) -> Self {
        Self::DegenerateCycle {
            context: context.into(),
        }
    }

    /// Returns true for errors that must abort the trial.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        !matches!(self, Self::DegenerateCycle { .. })
    }
}

/// Result type for gait operations.
pub type GaitResult<T> = Result<T, GaitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GaitError::UnknownModel("plugin-gait".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("unknown biomechanical model"));
        assert!(msg.contains("plugin-gait"));
    }

    #[test]
    fn error_length_mismatch() {
        let err = GaitError::length_mismatch("L_Thigh", 500, 498);
        let msg = format!("{err}");
        assert!(msg.contains("L_Thigh"));
        assert!(msg.contains("500"));
        assert!(msg.contains("498"));
    }

    #[test]
    fn error_unordered_events() {
        let err = GaitError::UnorderedEvents {
            frame: 10,
            previous: 12,
        };
        assert!(format!("{err}").contains("strictly increasing"));
    }

    #[test]
    fn degenerate_is_not_configuration() {
        assert!(!GaitError::degenerate("zero-length stride").is_configuration());
        assert!(GaitError::EmptyTrial.is_configuration());
        assert!(GaitError::MissingMarker("LHeel".into()).is_configuration());
    }
}

//! Error types for trial file reading.

use std::path::{Path, PathBuf};

use gait_types::GaitError;
use thiserror::Error;

/// Result type for trial file reading.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while reading trial files.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Invalid file content.
    #[error("invalid {format} content: {message}")]
    InvalidContent {
        /// File format being read.
        format: &'static str,
        /// Description of what was invalid.
        message: String,
    },

    /// The file lacks a column the reader needs.
    #[error("{format} file has no {column} column")]
    MissingColumn {
        /// File format being read.
        format: &'static str,
        /// Column label.
        column: String,
    },

    /// The input does not satisfy the trial's configuration.
    #[error(transparent)]
    Gait(#[from] GaitError),

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IoError {
    /// Create an `InvalidContent` error.
    #[must_use]
    pub fn invalid_content(format: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidContent {
            format,
            message: message.into(),
        }
    }

    /// Create a `MissingColumn` error.
    #[must_use]
    pub fn missing_column(format: &'static str, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            format,
            column: column.into(),
        }
    }

    /// Returns true if the error is a configuration error of the trial.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Gait(err) if err.is_configuration())
    }
}

/// Reads a whole file, mapping a missing file to [`IoError::FileNotFound`].
pub(crate) fn read_text(path: &Path) -> IoResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })
}

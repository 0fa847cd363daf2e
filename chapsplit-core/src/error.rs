//! Error types for chapter splitting

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the splitting pipeline.
///
/// Everything here is fatal for the run. Recoverable conditions (a title that
/// sanitizes to nothing, a translation without markers) never become errors.
#[derive(Debug, Error)]
pub enum SplitError {
    /// Source file is missing or unreadable
    #[error("input not found: {}", .path.display())]
    InputNotFound {
        /// Path that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Source bytes are not valid UTF-8
    #[error("invalid UTF-8 in {origin}: {source}")]
    Encoding {
        /// File path or a short description of the input
        origin: String,
        /// Underlying decoding error
        #[source]
        source: std::str::Utf8Error,
    },

    /// Write-side failure before any chapter file (output directory)
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        /// Path that could not be created or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A chapter file or the manifest failed once writing had begun
    #[error("partial split: wrote {written} of {total} chapter files, failed at {}: {source}", .path.display())]
    PartialSplit {
        /// Chapter files written before the failure
        written: usize,
        /// Chapter files that should have been written
        total: usize,
        /// Path of the chapter file or manifest that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration value
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl SplitError {
    /// Wrap a write-side I/O error with the path that failed
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SplitError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether some output was left on disk by this failure
    pub fn is_partial(&self) -> bool {
        matches!(self, SplitError::PartialSplit { written, .. } if *written > 0)
    }
}

/// Result type for splitting operations
pub type Result<T> = std::result::Result<T, SplitError>;

//! Error type shared by the workspace.
//!
//! Arithmetic never fails. Only configuration, persistence, and cancellation
//! produce a `TimesError`.

use std::path::PathBuf;

use crate::fraction::WordError;

/// Error type for a `times` run.
#[derive(Debug, thiserror::Error)]
pub enum TimesError {
    /// Invalid option value.
    #[error("configuration error: {0}")]
    Config(String),

    /// A state or bins file holds something other than the expected records.
    #[error("malformed checkpoint {}:{line}: {reason}", path.display())]
    MalformedCheckpoint {
        /// File that failed to parse.
        path: PathBuf,
        /// 1-based line number (0 when the problem is the file as a whole).
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// Reading or writing a state or bins file failed.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Restored words cannot be adopted.
    #[error("invalid checkpoint words: {0}")]
    InvalidWords(#[from] WordError),

    /// The run was cancelled.
    #[error("run cancelled")]
    Cancelled,
}

impl TimesError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a parse failure for one line of a file.
    pub fn malformed(path: impl Into<PathBuf>, line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedCheckpoint {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }
}

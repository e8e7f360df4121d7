//! Error types for tabular mesh import.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for mesh import operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while reading a cell table.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// A data row could not be parsed.
    #[error("{path}:{line}: {message}")]
    Parse {
        /// File containing the row.
        path: PathBuf,
        /// 1-based line number of the row.
        line: usize,
        /// Description of what was wrong.
        message: String,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IoError {
    /// Create a `Parse` error for `line` of `path`.
    #[must_use]
    pub fn parse(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    /// Whether this error comes from malformed content rather than file access.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display() {
        let err = IoError::parse("mesh/Cell0Ds.csv", 3, "expected 4 fields, found 3");
        assert_eq!(
            err.to_string(),
            "mesh/Cell0Ds.csv:3: expected 4 fields, found 3"
        );
        assert!(err.is_parse());
    }

    #[test]
    fn not_found_display() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("missing.csv"),
        };
        assert_eq!(err.to_string(), "file not found: missing.csv");
        assert!(!err.is_parse());
    }
}

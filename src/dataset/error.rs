//! Dataset loading error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the dataset
#[derive(Error, Debug)]
pub enum LoadError {
    /// The source file could not be opened or read
    #[error("Failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV framing error (unbalanced quotes, invalid UTF-8, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// One or more required columns are absent from the header row
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// A row could not be parsed into a record
    #[error("Malformed row at line {line}: {message}")]
    Malformed { line: u64, message: String },
}

/// Result type alias for dataset loading
pub type LoadResult<T> = Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoadError::MissingColumns(vec!["Age".to_string(), "Sex".to_string()]);
        assert_eq!(err.to_string(), "Missing required columns: Age, Sex");

        let err = LoadError::Malformed {
            line: 4,
            message: "unknown variant `X`".to_string(),
        };
        assert_eq!(err.to_string(), "Malformed row at line 4: unknown variant `X`");
    }
}

//! Question source error types.
//!
//! Only loading and parsing can fail. Problems with typed answers are never
//! errors; the engine folds them into the score.

use thiserror::Error;

/// Errors that can occur while loading a question set.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The question file could not be opened.
    #[error("failed to open question file '{path}': {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A row did not contain exactly two fields.
    #[error("malformed record on line {line}: expected 2 fields, found {found}")]
    MalformedRecord { line: u64, found: usize },

    /// The underlying CSV reader failed (I/O error or invalid UTF-8).
    #[error("failed to read question CSV: {0}")]
    Csv(#[from] csv::Error),
}

impl QuizError {
    /// Returns `true` if the source itself could not be reached, as opposed
    /// to being reachable but badly formatted.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, QuizError::SourceUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_record_message() {
        let err = QuizError::MalformedRecord { line: 3, found: 1 };
        assert_eq!(
            err.to_string(),
            "malformed record on line 3: expected 2 fields, found 1"
        );
        assert!(!err.is_unavailable());
    }

    #[test]
    fn unavailable_keeps_io_source() {
        let err = QuizError::SourceUnavailable {
            path: "missing.csv".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.is_unavailable());
        assert!(err.to_string().contains("missing.csv"));
        assert!(std::error::Error::source(&err).is_some());
    }
}

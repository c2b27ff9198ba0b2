// error.rs - Error taxonomy for the alignment/score pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Fatal pipeline errors. Every variant aborts the run; none are retried.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Empty, unreadable, or non-rectangular alignment
    #[error("Malformed alignment: {reason}")]
    MalformedAlignment { reason: String },

    /// A score line that is not a floating-point number (1-based line)
    #[error("Invalid score at line {line}: '{text}'")]
    InvalidScore { line: usize, text: String },

    #[error("Column count mismatch: alignment has {columns} columns but {scores} scores were supplied")]
    ColumnCountMismatch { columns: usize, scores: usize },

    /// A requested record identity does not exist in the alignment
    #[error("Record '{name}' not found in alignment")]
    MissingIdentity { name: String },

    /// Column width changed between parse and encode (1-based column)
    #[error("Internal consistency fault: column {column} has {found} symbols, expected {expected}")]
    InconsistentRow {
        column: usize,
        found: usize,
        expected: usize,
    },

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Encoding error: {0}")]
    Encode(String),
}

impl PipelineError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PipelineError::Io {
            path: path.into(),
            source,
        }
    }

    /// Name of the gate that produced this error, for diagnostics
    pub fn gate(&self) -> &'static str {
        match self {
            PipelineError::MalformedAlignment { .. } | PipelineError::MissingIdentity { .. } => {
                "parse-alignment"
            }
            PipelineError::InvalidScore { .. } => "parse-scores",
            PipelineError::ColumnCountMismatch { .. } => "validate",
            PipelineError::InconsistentRow { .. } | PipelineError::Encode(_) => "encode",
            PipelineError::Io { .. } => "io",
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_offending_values() {
        let err = PipelineError::ColumnCountMismatch {
            columns: 5,
            scores: 4,
        };
        assert!(err.to_string().contains("5 columns"));
        assert!(err.to_string().contains("4 scores"));
        assert_eq!(err.gate(), "validate");

        let err = PipelineError::InvalidScore {
            line: 3,
            text: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid score at line 3: 'abc'");
    }
}

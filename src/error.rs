//! Error taxonomy for the analysis pipeline
//!
//! Fatal conditions are [`AnalysisError`]. Record-level problems are
//! [`ValidationError`] and only exclude the offending row. Undefined scores are
//! not errors at all; they travel as [`ComputationWarning`] values.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Fatal errors: reported to the user, non-zero exit.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// No usable export in the scanned folder
    #[error("no export file found in {}: {reason}", .folder.display())]
    FileDiscovery { folder: PathBuf, reason: String },

    /// Malformed table or unexpected column schema
    #[error("failed to parse {origin}{}: {message}", .row.map(|r| format!(" (row {})", r)).unwrap_or_default())]
    Parse {
        origin: String,
        row: Option<usize>,
        message: String,
    },

    /// Every record in the batch failed validation
    #[error("all {rejected} records failed validation")]
    NoValidRecords { rejected: usize },

    /// The output document could not be produced
    #[error("failed to write report to {}: {source}", .path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report template failed to render
    #[error("failed to render report: {0}")]
    Template(#[from] askama::Error),

    /// Invalid or unreadable configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Other I/O failures
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AnalysisError {
    /// Create a parse error not tied to a specific row
    pub fn parse(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            origin: origin.into(),
            row: None,
            message: message.into(),
        }
    }

    /// Create a parse error for a 1-based data row
    pub fn parse_at(origin: impl Into<String>, row: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            origin: origin.into(),
            row: Some(row),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Per-record validation failures. The record is dropped with a warning.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("row {row}: player name is missing")]
    MissingIdentity { row: usize },

    #[error("row {row}: duplicate player name '{name}' (first seen at row {first_row})")]
    DuplicateIdentity {
        row: usize,
        name: String,
        first_row: usize,
    },
}

impl ValidationError {
    /// 1-based data row of the rejected record
    pub fn row(&self) -> usize {
        match self {
            Self::MissingIdentity { row } => *row,
            Self::DuplicateIdentity { row, .. } => *row,
        }
    }
}

/// A (player, role) pair whose score could not be computed.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputationWarning {
    pub player: String,
    pub role: String,
    pub reason: String,
}

impl fmt::Display for ComputationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}: {}", self.player, self.role, self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let e = AnalysisError::parse_at("squad.html", 4, "expected 12 cells, found 9");
        assert_eq!(
            e.to_string(),
            "failed to parse squad.html (row 4): expected 12 cells, found 9"
        );
        let e = AnalysisError::parse("squad.html", "no table found");
        assert_eq!(e.to_string(), "failed to parse squad.html: no table found");
    }

    #[test]
    fn test_validation_row() {
        let e = ValidationError::DuplicateIdentity {
            row: 7,
            name: "Jo Smith".to_string(),
            first_row: 2,
        };
        assert_eq!(e.row(), 7);
        assert!(e.to_string().contains("first seen at row 2"));
    }
}

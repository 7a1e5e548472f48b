//! Error taxonomy for profiling calls.
//!
//! Every error is terminal for the current call: no partial results and no
//! retries. Validation problems are aggregated into a single composite
//! failure so the caller sees every shape problem at once.

use serde::Serialize;
use thiserror::Error;

/// A single structured validation problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Which input the problem concerns, e.g. `sampleSize` or `header[2]`.
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("validation failed:\n{}", render_issues(.0))]
    Validation(Vec<ValidationIssue>),

    #[error("invalid {format} format: {reason}")]
    InvalidFormat { format: String, reason: String },

    #[error("{0}")]
    EmptySource(String),

    #[error("XML source must contain a repeating element for records")]
    MissingRecordCollection,

    #[error("no adapter supports file: {0}")]
    UnsupportedFormat(String),

    #[error("failed to decode source as {0}")]
    Encoding(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProfileError {
    pub fn invalid_format(format: &str, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            format: format.to_string(),
            reason: reason.into(),
        }
    }
}

fn render_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("- {}: {}", issue.field, issue.message))
        .collect::<Vec<_>>()
        .join("\n")
}

pub type Result<T> = std::result::Result<T, ProfileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_enumerates_issues() {
        let error = ProfileError::Validation(vec![
            ValidationIssue::new("headers", "duplicate headers found: name"),
            ValidationIssue::new("record[1]", "record has 2 fields, expected 3"),
        ]);
        let text = error.to_string();
        assert!(text.starts_with("validation failed:\n"));
        assert!(text.contains("- headers: duplicate headers found: name"));
        assert!(text.contains("- record[1]: record has 2 fields, expected 3"));
    }
}

//! Domain error types.
//!
//! Every validation failure in the model surfaces as a [`MarkbookError`]
//! at the point of construction or call. Nothing is retried or swallowed.

use thiserror::Error;

/// Errors raised by the assessment, trainee, and marking model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MarkbookError {
    /// The type tag is not one of `multiple-choice`, `technical`, `presentation`.
    #[error("invalid assessment type: '{0}'")]
    InvalidAssessmentType(String),

    /// The raw score lies outside [0, 100].
    #[error("invalid score: {0} (must be between 0 and 100)")]
    InvalidScore(f64),

    /// A value handed to a trainee is not a valid assessment.
    #[error("invalid assessment object: {0}")]
    InvalidAssessmentObject(String),
}

/// Convenience alias used throughout the domain model.
pub type Result<T> = std::result::Result<T, MarkbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            MarkbookError::InvalidAssessmentType("essay".into()).to_string(),
            "invalid assessment type: 'essay'"
        );
        assert_eq!(
            MarkbookError::InvalidScore(101.0).to_string(),
            "invalid score: 101 (must be between 0 and 100)"
        );
    }
}

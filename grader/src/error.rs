//! Grader Error Types
//!
//! This module defines the [`GraderError`] enum, covering the failure modes of
//! the grading library itself.
//!
//! Note that a failed *execution* is not an error here: the executor signals it
//! through the `execution_failed` flag of [`grade`](crate::grade) and it maps
//! to a zero-mark [`TestResult`](crate::types::TestResult). Likewise a
//! strategy given malformed input (an invalid regex pattern, a broken template
//! verdict) contains the problem locally and reports it through the result's
//! diagnostic text, so one bad test case never aborts grading of the rest of a
//! submission.

use std::fmt;

/// Represents all error types that can occur in the grading library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraderError {
    /// A grader name was requested that is not present in the registry.
    /// This is a configuration or usage error in the calling layer; it is
    /// never silently defaulted to another strategy.
    UnknownGrader(String),
}

impl fmt::Display for GraderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraderError::UnknownGrader(name) => {
                write!(f, "Unknown grader '{name}'")
            }
        }
    }
}

impl std::error::Error for GraderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_grader_display() {
        let err = GraderError::UnknownGrader("NoSuchGrader".to_string());
        assert_eq!(err.to_string(), "Unknown grader 'NoSuchGrader'");
    }
}

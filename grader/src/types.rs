//! # Types Module
//!
//! This module defines the core data structures of the grading system: the
//! immutable [`TestCase`] descriptor supplied by the question store, and the
//! [`TestResult`] record produced for every grading decision.

use serde::{Deserialize, Serialize};

use crate::utilities::sanitize::sanitize;

/// An immutable descriptor of one test case, supplied by the question store.
///
/// The grader never mutates or retains a test case; it only reads from it while
/// producing a [`TestResult`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestCase {
    /// The expected output text. For the regex grader this field holds the
    /// pattern the output must match instead of a literal transcript.
    pub expected: String,
    /// The stdin the executor fed to the program. Carried for display and
    /// diagnostics only; grading never re-runs anything.
    #[serde(default)]
    pub stdin: String,
    /// The mark weight of this test case within its question.
    pub mark: f64,
}

impl TestCase {
    /// Create a test case with the given expected output and mark weight.
    pub fn new(expected: impl Into<String>, mark: f64) -> Self {
        Self {
            expected: expected.into(),
            stdin: String::new(),
            mark,
        }
    }

    /// Attach the stdin text that was fed to the program.
    pub fn with_stdin(mut self, stdin: impl Into<String>) -> Self {
        self.stdin = stdin.into();
        self
    }
}

/// The outcome of grading one test case.
///
/// A result is constructed fresh per grading call and handed back to the
/// caller, which owns it from then on (display, aggregation, storage).
/// The `expected` and `got` fields are always sanitized: control characters
/// are replaced by hex escapes and the text is capped at
/// [`MAX_STRING_LENGTH`](crate::utilities::sanitize::MAX_STRING_LENGTH) bytes,
/// whichever strategy produced the result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestResult {
    /// Sanitized expected-output text.
    pub expected: String,
    /// Sanitized actual-output text, or a diagnostic message when grading
    /// itself could not be carried out (failed execution, malformed pattern).
    pub got: String,
    /// Whether the output satisfied the strategy's correctness rule.
    pub is_correct: bool,
    /// Fraction of the marks earned, in `[0.0, 1.0]`. Exactly `0.0` for
    /// incorrect results and failed executions.
    pub grade: f64,
    /// Marks earned for this test case (`grade * possible`).
    pub awarded: f64,
    /// Marks available for this test case (the test case's weight).
    pub possible: f64,
}

impl TestResult {
    /// Build a result, sanitizing both text fields and clamping the grade.
    ///
    /// All strategies construct their results through this function so the
    /// sanitization invariant holds uniformly.
    ///
    /// # Arguments
    ///
    /// * `expected` - Raw expected-output text.
    /// * `got` - Raw actual-output text or diagnostic message.
    /// * `is_correct` - The strategy's correctness verdict.
    /// * `grade` - Fraction earned; clamped into `[0.0, 1.0]`.
    /// * `possible` - The test case's mark weight.
    pub fn new(expected: &str, got: &str, is_correct: bool, grade: f64, possible: f64) -> Self {
        let grade = if grade.is_finite() {
            grade.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            expected: sanitize(expected),
            got: sanitize(got),
            is_correct,
            grade,
            awarded: grade * possible,
            possible,
        }
    }
}

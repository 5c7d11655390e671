//! A grader that performs an exact match comparison between expected and actual
//! output, ignoring trailing whitespace.
//!
//! The `EqualityGrader` awards marks on an all-or-nothing basis. Output is
//! correct only if it matches the expected output exactly once trailing
//! whitespace has been trimmed from every line and trailing blank lines have
//! been dropped, so a final newline or stray spaces at the ends of lines never
//! cost marks. Everything else, including case and line order, must match.

use crate::traits::grader::Grader;
use crate::types::{TestCase, TestResult};

/// A grader that awards full marks if the output equals the expected output
/// after trailing whitespace is ignored, and zero marks otherwise.
///
/// This is the default grading strategy for most question types: the presence,
/// order, and exact content of every line is a critical success factor, but
/// trailing whitespace is an artifact of how programs print and is forgiven.
pub struct EqualityGrader;

/// Split text into lines with trailing whitespace trimmed from each, dropping
/// trailing blank lines. `lines()` already strips `\n`; trimming afterwards
/// also absorbs any `\r` left by CRLF endings.
fn trimmed_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.lines().map(str::trim_end).collect();
    while lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

impl Grader for EqualityGrader {
    fn name(&self) -> &'static str {
        "EqualityGrader"
    }

    /// Compares output and expected output for an exact, line-by-line match.
    ///
    /// # Returns
    ///
    /// Returns a `TestResult` with a grade of `1.0` if the outputs match after
    /// trailing-whitespace trimming, and `0.0` otherwise.
    fn grade_known_good(&self, output: &str, testcase: &TestCase) -> TestResult {
        let is_correct = trimmed_lines(output) == trimmed_lines(&testcase.expected);
        let grade = if is_correct { 1.0 } else { 0.0 };
        TestResult::new(&testcase.expected, output, is_correct, grade, testcase.mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_output_is_correct() {
        let testcase = TestCase::new("line 1\nline 2", 10.0);
        let result = EqualityGrader.grade_known_good("line 1\nline 2", &testcase);
        assert!(result.is_correct);
        assert_eq!(result.grade, 1.0);
        assert_eq!(result.awarded, 10.0);
    }

    #[test]
    fn test_trailing_newline_ignored() {
        let testcase = TestCase::new("42", 1.0);
        let result = EqualityGrader.grade_known_good("42\n", &testcase);
        assert!(result.is_correct);
        assert_eq!(result.grade, 1.0);
    }

    #[test]
    fn test_trailing_spaces_ignored() {
        let testcase = TestCase::new("a\nb", 1.0);
        let result = EqualityGrader.grade_known_good("a   \nb\t\n\n", &testcase);
        assert!(result.is_correct);
    }

    #[test]
    fn test_crlf_line_endings_ignored() {
        let testcase = TestCase::new("a\nb", 1.0);
        let result = EqualityGrader.grade_known_good("a\r\nb\r\n", &testcase);
        assert!(result.is_correct);
    }

    #[test]
    fn test_wrong_output_scores_zero() {
        let testcase = TestCase::new("42", 10.0);
        let result = EqualityGrader.grade_known_good("43", &testcase);
        assert!(!result.is_correct);
        assert_eq!(result.grade, 0.0);
        assert_eq!(result.awarded, 0.0);
    }

    #[test]
    fn test_leading_whitespace_matters() {
        let testcase = TestCase::new("42", 1.0);
        let result = EqualityGrader.grade_known_good("  42", &testcase);
        assert!(!result.is_correct);
    }

    #[test]
    fn test_case_matters() {
        let testcase = TestCase::new("Hello", 1.0);
        let result = EqualityGrader.grade_known_good("hello", &testcase);
        assert!(!result.is_correct);
    }

    #[test]
    fn test_interior_blank_lines_matter() {
        let testcase = TestCase::new("a\nb", 1.0);
        let result = EqualityGrader.grade_known_good("a\n\nb", &testcase);
        assert!(!result.is_correct);
    }

    #[test]
    fn test_empty_output_matches_empty_expected() {
        let testcase = TestCase::new("", 1.0);
        let result = EqualityGrader.grade_known_good("\n", &testcase);
        assert!(result.is_correct);
    }

    #[test]
    fn test_result_fields_are_sanitized() {
        let testcase = TestCase::new("42", 1.0);
        let result = EqualityGrader.grade_known_good("42\x00", &testcase);
        assert!(!result.is_correct);
        assert_eq!(result.got, "42\\x00");
    }
}

//! A grader that performs a forgiving equality comparison.
//!
//! The `NearEqualityGrader` is the equality grader with the rough edges filed
//! off: comparison is case-insensitive, blank lines are ignored entirely, and
//! trailing whitespace is trimmed from every line. It suits questions where the
//! shape of the output matters but students should not lose marks over
//! capitalization or spacing.

use crate::traits::grader::Grader;
use crate::types::{TestCase, TestResult};

/// A grader that awards full marks if the output matches the expected output
/// up to case, blank lines, and trailing whitespace, and zero marks otherwise.
///
/// Like [`EqualityGrader`](crate::graders::equality_grader::EqualityGrader)
/// this is all-or-nothing; only the notion of "equal" is looser. Line order
/// and line content (beyond case) still have to match.
pub struct NearEqualityGrader;

/// Lowercase and right-trim each line, dropping blank lines altogether.
fn comparable_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim_end().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect()
}

impl Grader for NearEqualityGrader {
    fn name(&self) -> &'static str {
        "NearEqualityGrader"
    }

    /// Compares output and expected output case-insensitively, ignoring blank
    /// lines and trailing whitespace.
    ///
    /// # Returns
    ///
    /// Returns a `TestResult` with a grade of `1.0` on a match and `0.0`
    /// otherwise.
    fn grade_known_good(&self, output: &str, testcase: &TestCase) -> TestResult {
        let is_correct = comparable_lines(output) == comparable_lines(&testcase.expected);
        let grade = if is_correct { 1.0 } else { 0.0 };
        TestResult::new(&testcase.expected, output, is_correct, grade, testcase.mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_is_correct() {
        let testcase = TestCase::new("Hello\nWorld", 4.0);
        let result = NearEqualityGrader.grade_known_good("Hello\nWorld", &testcase);
        assert!(result.is_correct);
        assert_eq!(result.awarded, 4.0);
    }

    #[test]
    fn test_case_difference_still_correct() {
        let testcase = TestCase::new("Hello World", 1.0);
        let result = NearEqualityGrader.grade_known_good("hello world", &testcase);
        assert!(result.is_correct);
    }

    #[test]
    fn test_blank_lines_ignored() {
        let testcase = TestCase::new("a\nb", 1.0);
        let result = NearEqualityGrader.grade_known_good("a\n\n\nb\n", &testcase);
        assert!(result.is_correct);
    }

    #[test]
    fn test_different_content_scores_zero() {
        let testcase = TestCase::new("expected", 6.0);
        let result = NearEqualityGrader.grade_known_good("something else", &testcase);
        assert!(!result.is_correct);
        assert_eq!(result.grade, 0.0);
        assert_eq!(result.awarded, 0.0);
    }

    #[test]
    fn test_line_order_still_matters() {
        let testcase = TestCase::new("a\nb", 1.0);
        let result = NearEqualityGrader.grade_known_good("b\na", &testcase);
        assert!(!result.is_correct);
    }

    #[test]
    fn test_interior_spacing_still_matters() {
        let testcase = TestCase::new("a b", 1.0);
        let result = NearEqualityGrader.grade_known_good("a  b", &testcase);
        assert!(!result.is_correct);
    }
}

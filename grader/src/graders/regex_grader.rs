//! A grader that uses a regular expression to decide correctness.
//!
//! The `RegexGrader` treats the test case's `expected` field as a regular
//! expression rather than a literal transcript. The output is correct if the
//! pattern matches anywhere within it. This is a flexible tool for questions
//! where many output variants are acceptable, e.g. free-form wording around a
//! required value.

use regex::RegexBuilder;
use tracing::warn;

use crate::traits::grader::Grader;
use crate::types::{TestCase, TestResult};

/// A grader that awards full marks if the expected-output pattern matches the
/// output, and zero marks otherwise.
///
/// Patterns are compiled in multi-line mode, so `^` and `$` anchor to line
/// boundaries within the output. An invalid pattern is a question-authoring
/// mistake, not the student's: it is caught locally and reported as an
/// incorrect result with a diagnostic message, so grading of the remaining
/// test cases continues undisturbed.
pub struct RegexGrader;

impl Grader for RegexGrader {
    fn name(&self) -> &'static str {
        "RegexGrader"
    }

    /// Matches the test case's pattern against the raw output.
    ///
    /// # Returns
    ///
    /// Returns a `TestResult` with a grade of `1.0` if the pattern matches and
    /// `0.0` otherwise. If the pattern fails to compile, the result carries
    /// the compile error and the raw output in its `got` field.
    fn grade_known_good(&self, output: &str, testcase: &TestCase) -> TestResult {
        let regex = match RegexBuilder::new(&testcase.expected).multi_line(true).build() {
            Ok(regex) => regex,
            Err(e) => {
                warn!(pattern = %testcase.expected, error = %e, "invalid expected-output regex");
                let diagnostic = format!("Invalid expected-output regex: {e}\n{output}");
                return TestResult::new(&testcase.expected, &diagnostic, false, 0.0, testcase.mark);
            }
        };

        let is_correct = regex.is_match(output);
        let grade = if is_correct { 1.0 } else { 0.0 };
        TestResult::new(&testcase.expected, output, is_correct, grade, testcase.mark)
    }
}

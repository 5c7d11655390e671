//! A grader that reads the grading verdict from the program output itself.
//!
//! Some questions do their own grading: the question's template wraps the
//! student's code in custom checking logic, and what the executor captures is
//! not the student's output but the checker's verdict. The `TemplateGrader`
//! parses that verdict, a JSON object of the form
//!
//! ```json
//! {"fraction": 0.5, "got": "optional display text", "expected": "optional"}
//! ```
//!
//! and turns it into a [`TestResult`]. `fraction` is the fraction of the marks
//! to award; `got` and `expected`, when present, replace the texts shown to the
//! student.

use serde::Deserialize;
use tracing::warn;

use crate::traits::grader::Grader;
use crate::types::{TestCase, TestResult};

/// A grader that parses the program output as a JSON grading verdict.
///
/// A malformed verdict (not JSON, missing `fraction`, fraction outside
/// `[0.0, 1.0]`) is treated like any other strategy-internal failure: the
/// result is incorrect with a diagnostic `got`, and grading of other test
/// cases continues.
pub struct TemplateGrader;

/// How close `fraction` must be to 1.0 to count as fully correct. Guards
/// against templates that compute the fraction in floating point.
const CORRECTNESS_EPSILON: f64 = 1e-6;

/// The verdict a grading template is expected to print.
#[derive(Debug, Deserialize)]
struct TemplateVerdict {
    /// Fraction of the marks to award, in `[0.0, 1.0]`.
    fraction: f64,
    /// Optional replacement for the actual-output text shown to the student.
    #[serde(default)]
    got: Option<String>,
    /// Optional replacement for the expected-output text shown to the student.
    #[serde(default)]
    expected: Option<String>,
}

impl Grader for TemplateGrader {
    fn name(&self) -> &'static str {
        "TemplateGrader"
    }

    /// Parses the output as a JSON verdict and converts it into a result.
    ///
    /// # Returns
    ///
    /// Returns a `TestResult` whose grade is the verdict's `fraction`, correct
    /// iff the fraction is (numerically) 1.0. A verdict that cannot be parsed
    /// or is out of range yields an incorrect result carrying a diagnostic.
    fn grade_known_good(&self, output: &str, testcase: &TestCase) -> TestResult {
        let verdict = match serde_json::from_str::<TemplateVerdict>(output.trim()) {
            Ok(verdict) if verdict.fraction.is_finite() && (0.0..=1.0).contains(&verdict.fraction) => {
                verdict
            }
            Ok(verdict) => {
                warn!(fraction = verdict.fraction, "template verdict fraction out of range");
                let diagnostic = format!(
                    "Grading template returned an out-of-range fraction ({})\n{output}",
                    verdict.fraction
                );
                return TestResult::new(&testcase.expected, &diagnostic, false, 0.0, testcase.mark);
            }
            Err(e) => {
                warn!(error = %e, "template verdict is not valid JSON");
                let diagnostic = format!("Grading template did not return a valid verdict: {e}\n{output}");
                return TestResult::new(&testcase.expected, &diagnostic, false, 0.0, testcase.mark);
            }
        };

        let is_correct = (verdict.fraction - 1.0).abs() < CORRECTNESS_EPSILON;
        let expected = verdict.expected.as_deref().unwrap_or(&testcase.expected);
        let got = verdict.got.as_deref().unwrap_or(output);
        TestResult::new(expected, got, is_correct, verdict.fraction, testcase.mark)
    }
}

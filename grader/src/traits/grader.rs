//! The grading-strategy trait and the uniform grading entry point.

use crate::types::{TestCase, TestResult};

/// Grader is a strategy trait for deciding correctness and assigning a grade.
/// Each implementation provides a specific rule for comparing the output a
/// student's program produced against one test case's expected output.
///
/// Strategies are stateless and shared: the registry hands out `'static`
/// references that may be used concurrently from any number of threads.
pub trait Grader: Send + Sync {
    /// The stable external identifier of this strategy.
    ///
    /// This is the name under which the strategy is registered, the name that
    /// appears in exported question definitions, and the key a persisted
    /// grader choice is looked up by. Invariant:
    /// `available_graders()[s.name()]` resolves back to `s`.
    fn name(&self) -> &'static str;

    /// Grade output that came from a successful execution.
    ///
    /// Called only when the executor ran the program to completion; the
    /// execution-failure case is handled uniformly by [`grade`] before any
    /// strategy is consulted. Implementations must construct their result via
    /// [`TestResult::new`] so the sanitize-and-truncate invariant holds.
    ///
    /// # Arguments
    ///
    /// * `output` - The raw text the program produced.
    /// * `testcase` - The test case being graded.
    fn grade_known_good(&self, output: &str, testcase: &TestCase) -> TestResult;
}

/// Grade one test case's output. This is the uniform entry point all callers
/// use; it is a free function rather than a trait method so that no strategy
/// can override the execution-failure rule.
///
/// If `execution_failed` is true the program crashed, timed out, or otherwise
/// failed before producing trustworthy output. Grading then short-circuits:
/// the result is incorrect with a grade of exactly `0.0` (never partial
/// credit), and `got` carries the sanitized raw output as a diagnostic, e.g. a
/// stack trace. Otherwise the call is delegated to the strategy's
/// [`Grader::grade_known_good`].
///
/// # Arguments
///
/// * `grader` - The grading strategy selected for the question.
/// * `output` - The raw text captured from the program run.
/// * `testcase` - The test case being graded.
/// * `execution_failed` - Whether execution itself failed.
pub fn grade(
    grader: &dyn Grader,
    output: &str,
    testcase: &TestCase,
    execution_failed: bool,
) -> TestResult {
    if execution_failed {
        TestResult::new(&testcase.expected, output, false, 0.0, testcase.mark)
    } else {
        grader.grade_known_good(output, testcase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::available_graders;

    #[test]
    fn test_execution_failure_short_circuits_every_strategy() {
        let testcase = TestCase::new("42", 10.0);
        for (_, grader) in available_graders() {
            let result = grade(*grader, "Segmentation fault", &testcase, true);
            assert!(!result.is_correct, "{} must fail", grader.name());
            assert_eq!(result.grade, 0.0, "{} must award nothing", grader.name());
            assert_eq!(result.awarded, 0.0);
            assert!(result.got.contains("Segmentation fault"));
        }
    }

    #[test]
    fn test_execution_failure_sanitizes_diagnostic_output() {
        let testcase = TestCase::new("42", 5.0);
        let grader = available_graders()["EqualityGrader"];
        let result = grade(grader, "crash\x1b[0m", &testcase, true);
        assert_eq!(result.got, "crash\\x1b[0m");
    }

    #[test]
    fn test_known_good_path_delegates_to_strategy() {
        let testcase = TestCase::new("42", 5.0);
        let grader = available_graders()["EqualityGrader"];
        let result = grade(grader, "42\n", &testcase, false);
        assert!(result.is_correct);
        assert_eq!(result.grade, 1.0);
        assert_eq!(result.awarded, 5.0);
    }
}

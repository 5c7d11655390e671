//! # Graders
//!
//! This module provides the collection of grading strategies for evaluating
//! student output. Each strategy implements a specific rule for comparing the
//! output of a student's code with a test case's expected output.
//!
//! All strategies in this module adhere to the [`Grader`](crate::traits::grader::Grader)
//! trait, which defines a common interface for grading operations. This allows
//! for flexible and interchangeable grading strategies within the assessment
//! system; the chosen strategy is resolved by name through the
//! [`registry`](crate::registry).
//!
//! The available graders are:
//! - [`equality_grader`]: Exact match after trailing-whitespace trimming.
//! - [`near_equality_grader`]: Case-insensitive match that ignores blank lines.
//! - [`regex_grader`]: Treats the expected output as a regular expression.
//! - [`template_grader`]: Reads the grading verdict from the program output itself.

pub mod equality_grader;
pub mod near_equality_grader;
pub mod regex_grader;
pub mod template_grader;

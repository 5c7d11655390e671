//! # Grader Library
//!
//! This crate provides the output-grading contract for an automated
//! code-assessment system. After an external sandbox has run a student's
//! program against a test case, the captured output and the test case
//! descriptor are handed to a grading strategy, which decides correctness and
//! awards a grade. The crate performs no execution, persistence, or
//! aggregation itself; it is a pure library consumed by the surrounding
//! system.
//!
//! ## Key Concepts
//! - **[`Grader`]**: The strategy trait; each implementation is one rule for
//!   comparing actual against expected output.
//! - **[`grade`]**: The uniform entry point for grading one test case. A
//!   failed execution always maps to a zero-mark result here, before any
//!   strategy runs.
//! - **Registry**: A fixed name => strategy table ([`available_graders`],
//!   [`for_name`], [`GraderKind`]) used to resolve persisted grader choices
//!   and to export them by stable name.
//! - **[`TestResult`]**: The sanitized record of one grading decision. Its
//!   text fields are always control-character-escaped and length-capped.
//!
//! Grading is synchronous, deterministic, and free of shared mutable state;
//! the test cases of a submission may be graded concurrently without
//! coordination.

pub mod error;
pub mod graders;
pub mod registry;
pub mod traits;
pub mod types;
pub mod utilities;

pub use error::GraderError;
pub use registry::{GraderKind, available_graders, for_name};
pub use traits::grader::{Grader, grade};
pub use types::{TestCase, TestResult};
pub use utilities::sanitize::{MAX_STRING_LENGTH, sanitize};

//! # Traits Module
//!
//! This module contains the core trait used throughout the grading library for
//! extensibility and abstraction.
//!
//! - [`grader`]: Defines the strategy trait every grading strategy implements,
//!   plus the uniform entry point callers use to grade one test case.
//!
//! Implement the [`grader::Grader`] trait to extend the library with a new
//! grading strategy.

pub mod grader;

//! # Utilities
//!
//! This module contains shared helper functions used throughout the `grader` crate.
//!
//! Currently, this module exports the following sub-module:
//! - [`sanitize`]: The shared sanitize-and-truncate rule applied to every piece of
//!   output text before it is stored in a result.

pub mod sanitize;

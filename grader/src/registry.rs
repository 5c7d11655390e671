//! # Grader Registry
//!
//! This module maps stable external grader names to strategy instances. The
//! surrounding system persists a question's grader choice by name (and
//! exporters write that name into question-definition files), so the mapping
//! must be fixed and the names must round-trip: looking up `g.name()` yields
//! `g` again.
//!
//! The registry is built once behind a [`Lazy`] and never mutated afterwards;
//! it is safe to read from any number of threads concurrently. Requesting a
//! name that is not registered is a configuration error surfaced as
//! [`GraderError::UnknownGrader`], never silently defaulted.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::GraderError;
use crate::graders::equality_grader::EqualityGrader;
use crate::graders::near_equality_grader::NearEqualityGrader;
use crate::graders::regex_grader::RegexGrader;
use crate::graders::template_grader::TemplateGrader;
use crate::traits::grader::Grader;

/// The fixed name => strategy table. Keys are the externally known grader
/// names as they appear in exported questions.
static REGISTRY: Lazy<BTreeMap<&'static str, &'static dyn Grader>> = Lazy::new(|| {
    let graders: [&'static dyn Grader; 4] = [
        &EqualityGrader,
        &NearEqualityGrader,
        &RegexGrader,
        &TemplateGrader,
    ];
    graders.iter().map(|g| (g.name(), *g)).collect()
});

/// The fixed set of available graders, keyed by external name.
///
/// Absence of a key is the failure signal for callers resolving a configured
/// grader; [`for_name`] wraps that lookup with an explicit error.
pub fn available_graders() -> &'static BTreeMap<&'static str, &'static dyn Grader> {
    &REGISTRY
}

/// Resolve a persisted or configured grader name back to its strategy.
///
/// # Arguments
///
/// * `name` - The external grader name, e.g. `"EqualityGrader"`.
///
/// # Returns
///
/// * `Ok(&'static dyn Grader)` for a registered name.
/// * `Err(GraderError::UnknownGrader)` otherwise.
pub fn for_name(name: &str) -> Result<&'static dyn Grader, GraderError> {
    available_graders()
        .get(name)
        .copied()
        .ok_or_else(|| GraderError::UnknownGrader(name.to_string()))
}

/// The closed, config-facing form of the grader choice.
///
/// This is the type a question's stored configuration deserializes into; its
/// serde names are exactly the registry keys, so serialized configuration and
/// exported questions round-trip through [`GraderKind::as_str`] and
/// [`TryFrom<&str>`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraderKind {
    /// Exact match after trailing-whitespace trimming.
    #[serde(rename = "EqualityGrader")]
    Equality,
    /// Case-insensitive match ignoring blank lines.
    #[serde(rename = "NearEqualityGrader")]
    NearEquality,
    /// Expected output interpreted as a regular expression.
    #[serde(rename = "RegexGrader")]
    Regex,
    /// Grading verdict read from the program output itself.
    #[serde(rename = "TemplateGrader")]
    Template,
}

impl GraderKind {
    /// The external name of this grader, identical to its registry key.
    pub fn as_str(&self) -> &'static str {
        match self {
            GraderKind::Equality => "EqualityGrader",
            GraderKind::NearEquality => "NearEqualityGrader",
            GraderKind::Regex => "RegexGrader",
            GraderKind::Template => "TemplateGrader",
        }
    }

    /// The strategy instance this kind selects.
    pub fn grader(&self) -> &'static dyn Grader {
        match self {
            GraderKind::Equality => &EqualityGrader,
            GraderKind::NearEquality => &NearEqualityGrader,
            GraderKind::Regex => &RegexGrader,
            GraderKind::Template => &TemplateGrader,
        }
    }
}

impl TryFrom<&str> for GraderKind {
    type Error = GraderError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        match name {
            "EqualityGrader" => Ok(GraderKind::Equality),
            "NearEqualityGrader" => Ok(GraderKind::NearEquality),
            "RegexGrader" => Ok(GraderKind::Regex),
            "TemplateGrader" => Ok(GraderKind::Template),
            _ => Err(GraderError::UnknownGrader(name.to_string())),
        }
    }
}

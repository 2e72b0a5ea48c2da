//! Validation errors for untrusted payloads.
//!
//! Domain-specific errors (e.g. `LocateError`, `GdocsError`) are defined in
//! their respective crates and converge into `anyhow` in `redline-cli`.

use std::fmt;

use thiserror::Error;

/// What was wrong with a single field of an untrusted payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldProblem {
    /// The field was absent (or `null` where a value is required).
    Missing,
    /// The field was present with the wrong JSON type.
    WrongType { expected: &'static str },
    /// The field had the right type but a value outside the allowed set.
    UnexpectedValue { expected: &'static str },
}

impl fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("required field is missing"),
            Self::WrongType { expected } => write!(f, "expected {expected}"),
            Self::UnexpectedValue { expected } => write!(f, "expected the value {expected}"),
        }
    }
}

/// A payload failed strict construction.
///
/// `field` is a path into the payload such as `plan_id`, `patches[2].orig_text`
/// or `preamble.considerations[0]`. The root object itself is reported as `$`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid `{field}`: {problem}")]
pub struct ValidationError {
    pub field: String,
    pub problem: FieldProblem,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: impl Into<String>, problem: FieldProblem) -> Self {
        Self {
            field: field.into(),
            problem,
        }
    }

    #[must_use]
    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, FieldProblem::Missing)
    }

    #[must_use]
    pub fn wrong_type(field: impl Into<String>, expected: &'static str) -> Self {
        Self::new(field, FieldProblem::WrongType { expected })
    }
}

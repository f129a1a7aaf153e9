//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task name is empty after trimming.
    #[error("Task name must not be blank")]
    EmptyTaskName,

    /// The task name exceeds the storage limit.
    #[error("Task name must not exceed {max} characters")]
    TaskNameTooLong {
        /// Maximum accepted length in characters.
        max: usize,
    },
}

/// Error returned while parsing an enumerated task attribute from text or
/// persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct ParseEnumError {
    /// Attribute being parsed, e.g. `priority`.
    pub kind: &'static str,
    /// Offending input.
    pub value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

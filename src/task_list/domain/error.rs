//! Error types for task list domain validation.

use thiserror::Error;

/// Errors returned while constructing task list domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskListDomainError {
    /// The task list name is empty after trimming.
    #[error("Task list name must not be blank")]
    EmptyName,

    /// The task list name exceeds the storage limit.
    #[error("Task list name must not exceed {max} characters")]
    NameTooLong {
        /// Maximum accepted length in characters.
        max: usize,
    },
}

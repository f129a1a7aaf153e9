//! Error taxonomy shared by the task and task list services.
//!
//! Every service error classifies itself into one [`ErrorKind`]. The
//! presentation layer maps kinds onto status codes without inspecting the
//! concrete error type.

use std::fmt;

/// Coarse classification of a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A referenced task or task list does not exist.
    NotFound,
    /// The caller supplied a malformed or unsupported value.
    InvalidArgument,
    /// The global task limit has been reached.
    CapacityExceeded,
    /// Any other failure, including persistence errors.
    Unexpected,
}

impl ErrorKind {
    /// Returns `true` when the failure was caused by the caller's input.
    #[must_use]
    pub const fn is_client_error(self) -> bool {
        !matches!(self, Self::Unexpected)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotFound => "not_found",
            Self::InvalidArgument => "invalid_argument",
            Self::CapacityExceeded => "capacity_exceeded",
            Self::Unexpected => "unexpected",
        };
        f.write_str(label)
    }
}

//! Port contracts for task list management.
//!
//! Ports define infrastructure-agnostic interfaces used by task list services.

pub mod repository;

pub use repository::{TaskListRepository, TaskListRepositoryError, TaskListRepositoryResult};

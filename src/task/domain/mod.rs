//! Domain model for task lifecycle management.
//!
//! The task domain models task creation, state updates, relocation between
//! task lists, and the pure filter and sort builders used by task queries.
//! All infrastructure concerns stay outside of the domain boundary.

mod attributes;
mod error;
mod filter;
mod ids;
mod sort;
mod task;

pub use attributes::{Effort, Priority, parse_csv};
pub use error::{ParseEnumError, TaskDomainError};
pub use filter::{FilterClause, TaskFilter};
pub use ids::TaskId;
pub use sort::{SortDirection, SortKey, SortOrder, TaskField, UnknownTaskField};
pub use task::{NewTask, PersistedTaskData, Task, TaskName, TaskState};

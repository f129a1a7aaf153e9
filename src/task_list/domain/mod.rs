//! Domain model for task lists.

mod error;
mod ids;
mod task_list;

pub use error::TaskListDomainError;
pub use ids::TaskListId;
pub use task_list::{NewTaskList, TaskList, TaskListName};

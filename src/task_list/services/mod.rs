//! Application services for task list management.

mod catalog;

pub use catalog::{
    CreateTaskListRequest, TaskListService, TaskListServiceError, TaskListServiceResult,
};

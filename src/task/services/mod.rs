//! Application services for task lifecycle orchestration.

mod lifecycle;

pub use lifecycle::{
    CreateTaskRequest, DEFAULT_MAX_TASKS, ListTasksRequest, TaskService, TaskServiceError,
    TaskServiceResult,
};

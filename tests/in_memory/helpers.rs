//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Effort, Priority, Task, TaskId},
    services::{CreateTaskRequest, TaskService},
};
use taskboard::task_list::{
    adapters::memory::InMemoryTaskListRepository,
    domain::TaskListId,
    services::{CreateTaskListRequest, TaskListService},
};

/// Task service over in-memory repositories.
pub type MemoryTaskService = TaskService<InMemoryTaskRepository, InMemoryTaskListRepository>;

/// Task list service over the in-memory repository.
pub type MemoryTaskListService = TaskListService<InMemoryTaskListRepository>;

/// Both services sharing one set of repositories.
pub struct Board {
    pub tasks: MemoryTaskService,
    pub task_lists: MemoryTaskListService,
}

impl Board {
    /// Creates a board whose task service enforces `max_tasks`.
    #[must_use]
    pub fn with_max_tasks(max_tasks: u64) -> Self {
        let task_lists = Arc::new(InMemoryTaskListRepository::new());
        Self {
            tasks: TaskService::with_max_tasks(
                Arc::new(InMemoryTaskRepository::new()),
                Arc::clone(&task_lists),
                max_tasks,
            ),
            task_lists: TaskListService::new(task_lists),
        }
    }

    /// Creates a task list and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error when the task list cannot be created.
    pub async fn list(&self, name: &str) -> Result<TaskListId, eyre::Report> {
        let created = self
            .task_lists
            .create(CreateTaskListRequest::new(name))
            .await?;
        Ok(created.id())
    }

    /// Creates a task inside `list`.
    ///
    /// # Errors
    ///
    /// Returns an error when the task cannot be created.
    pub async fn task(
        &self,
        list: TaskListId,
        name: &str,
        priority: Priority,
        effort: Effort,
    ) -> Result<Task, eyre::Report> {
        let created = self
            .tasks
            .create_task(list, CreateTaskRequest::new(name, priority, effort))
            .await?;
        Ok(created)
    }
}

/// Provides a board with the default task limit.
#[fixture]
pub fn board() -> Board {
    Board::with_max_tasks(50)
}

/// Returns the raw identifiers of `tasks` in order.
#[must_use]
pub fn ids(tasks: &[Task]) -> Vec<i64> {
    tasks.iter().map(|task| task.id().value()).collect()
}

/// Returns the task identifier for a raw value.
#[must_use]
pub const fn task_id(value: i64) -> TaskId {
    TaskId::new(value)
}

//! Shared world state for task workflow BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{DEFAULT_MAX_TASKS, TaskService, TaskServiceError},
};
use taskboard::task_list::{
    adapters::memory::InMemoryTaskListRepository, domain::TaskListId, services::TaskListService,
};

/// Task service type used by the BDD world.
pub type TestTaskService = TaskService<InMemoryTaskRepository, InMemoryTaskListRepository>;

/// Scenario world for task workflow behaviour tests.
pub struct BoardWorld {
    pub tasks: TestTaskService,
    pub task_lists: TaskListService<InMemoryTaskListRepository>,
    pub lists_by_name: HashMap<String, TaskListId>,
    pub tasks_by_name: HashMap<String, Task>,
    pub listed: Vec<Task>,
    pub last_error: Option<TaskServiceError>,
}

impl BoardWorld {
    /// Creates a world whose task service enforces `max_tasks`.
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
            lists_by_name: HashMap::new(),
            tasks_by_name: HashMap::new(),
            listed: Vec::new(),
            last_error: None,
        }
    }

    /// Looks up a task list created earlier in the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error when no list with `name` was created.
    pub fn list_id(&self, name: &str) -> Result<TaskListId, eyre::Report> {
        self.lists_by_name
            .get(name)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown task list {name:?} in scenario world"))
    }

    /// Looks up a task created earlier in the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error when no task with `name` was created.
    pub fn task(&self, name: &str) -> Result<&Task, eyre::Report> {
        self.tasks_by_name
            .get(name)
            .ok_or_else(|| eyre::eyre!("unknown task {name:?} in scenario world"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::with_max_tasks(DEFAULT_MAX_TASKS)
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

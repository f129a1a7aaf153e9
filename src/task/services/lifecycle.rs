//! Service layer for task creation, queries, state updates and relocation.

use crate::error::ErrorKind;
use crate::task::{
    domain::{
        Effort, NewTask, Priority, SortOrder, Task, TaskDomainError, TaskFilter, TaskId,
        TaskName, TaskState,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use crate::task_list::{
    domain::TaskListId,
    ports::{TaskListRepository, TaskListRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

/// Default limit on the number of live tasks across all task lists.
pub const DEFAULT_MAX_TASKS: u64 = 50;

/// Request payload for creating a task inside a task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    name: String,
    priority: Priority,
    effort: Effort,
}

impl CreateTaskRequest {
    /// Creates a request with all required task fields.
    #[must_use]
    pub fn new(name: impl Into<String>, priority: Priority, effort: Effort) -> Self {
        Self {
            name: name.into(),
            priority,
            effort,
        }
    }
}

/// Query parameters for listing tasks.
///
/// Without a task list scope the query spans every task list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTasksRequest {
    task_list_id: Option<TaskListId>,
    priorities: Vec<Priority>,
    efforts: Vec<Effort>,
    sort_by: Option<String>,
    sort_direction: Option<String>,
}

impl ListTasksRequest {
    /// Creates a query spanning every task list.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Creates a query scoped to one task list.
    #[must_use]
    pub fn in_task_list(task_list_id: TaskListId) -> Self {
        Self {
            task_list_id: Some(task_list_id),
            ..Self::default()
        }
    }

    /// Restricts results to the given priorities.
    #[must_use]
    pub fn with_priorities(mut self, priorities: impl IntoIterator<Item = Priority>) -> Self {
        self.priorities = priorities.into_iter().collect();
        self
    }

    /// Restricts results to the given effort levels.
    #[must_use]
    pub fn with_efforts(mut self, efforts: impl IntoIterator<Item = Effort>) -> Self {
        self.efforts = efforts.into_iter().collect();
        self
    }

    /// Sets the comma-separated sort field list.
    #[must_use]
    pub fn sorted_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    /// Sets the sort direction token (`asc` or `desc`).
    #[must_use]
    pub fn with_direction(mut self, direction: impl Into<String>) -> Self {
        self.sort_direction = Some(direction.into());
        self
    }

    /// Returns the task list scope, if any.
    #[must_use]
    pub const fn task_list_id(&self) -> Option<TaskListId> {
        self.task_list_id
    }

    /// Builds the predicate selecting matching tasks.
    #[must_use]
    pub fn filter(&self) -> TaskFilter {
        TaskFilter::build(self.task_list_id, &self.priorities, &self.efforts)
    }

    /// Builds the result ordering.
    #[must_use]
    pub fn sort_order(&self) -> SortOrder {
        SortOrder::build(self.sort_by.as_deref(), self.sort_direction.as_deref())
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// The task does not exist.
    #[error("Task not found with id: {0}")]
    TaskNotFound(TaskId),
    /// The owning task list does not exist.
    #[error("TaskList not found with id: {0}")]
    TaskListNotFound(TaskListId),
    /// The destination task list of a move does not exist.
    #[error("Target TaskList not found with id: {0}")]
    TargetTaskListNotFound(TaskListId),
    /// The global task limit has been reached.
    #[error("Maximum task limit ({limit}) reached")]
    CapacityExceeded {
        /// Configured task limit.
        limit: u64,
    },
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// Task list repository operation failed.
    #[error(transparent)]
    TaskListRepository(#[from] TaskListRepositoryError),
}

impl TaskServiceError {
    /// Classifies the error for the presentation layer.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TaskNotFound(_)
            | Self::TaskListNotFound(_)
            | Self::TargetTaskListNotFound(_)
            | Self::Repository(TaskRepositoryError::NotFound(_))
            | Self::TaskListRepository(TaskListRepositoryError::NotFound(_)) => {
                ErrorKind::NotFound
            }
            Self::CapacityExceeded { .. } => ErrorKind::CapacityExceeded,
            Self::Domain(_) | Self::Repository(TaskRepositoryError::InvalidSortField(_)) => {
                ErrorKind::InvalidArgument
            }
            Self::Repository(TaskRepositoryError::Persistence(_))
            | Self::TaskListRepository(TaskListRepositoryError::Persistence(_)) => {
                ErrorKind::Unexpected
            }
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task lifecycle orchestration service.
///
/// Every write reads, checks and stores under a write gate shared by every
/// clone of the service. Concurrent callers cannot push the task count past
/// the configured limit, and a state update cannot write back a stale task
/// list over a concurrent move.
pub struct TaskService<T, L>
where
    T: TaskRepository,
    L: TaskListRepository,
{
    tasks: Arc<T>,
    task_lists: Arc<L>,
    max_tasks: u64,
    write_gate: Arc<Mutex<()>>,
}

impl<T, L> Clone for TaskService<T, L>
where
    T: TaskRepository,
    L: TaskListRepository,
{
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            task_lists: Arc::clone(&self.task_lists),
            max_tasks: self.max_tasks,
            write_gate: Arc::clone(&self.write_gate),
        }
    }
}

impl<T, L> TaskService<T, L>
where
    T: TaskRepository,
    L: TaskListRepository,
{
    /// Creates a task service with the default task limit.
    #[must_use]
    pub fn new(tasks: Arc<T>, task_lists: Arc<L>) -> Self {
        Self::with_max_tasks(tasks, task_lists, DEFAULT_MAX_TASKS)
    }

    /// Creates a task service with a custom task limit.
    #[must_use]
    pub fn with_max_tasks(tasks: Arc<T>, task_lists: Arc<L>, max_tasks: u64) -> Self {
        Self {
            tasks,
            task_lists,
            max_tasks,
            write_gate: Arc::new(Mutex::new(())),
        }
    }

    /// Creates a pending task inside a task list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskListNotFound`] when the task list does
    /// not exist, [`TaskServiceError::CapacityExceeded`] when the task limit
    /// has been reached, [`TaskServiceError::Domain`] when the name is blank,
    /// or a repository error when persistence fails.
    pub async fn create_task(
        &self,
        task_list_id: TaskListId,
        request: CreateTaskRequest,
    ) -> TaskServiceResult<Task> {
        let CreateTaskRequest {
            name,
            priority,
            effort,
        } = request;
        let task_name = TaskName::new(name)?;

        let _gate = self.write_gate.lock().await;
        if !self.task_lists.exists(task_list_id).await? {
            return Err(TaskServiceError::TaskListNotFound(task_list_id));
        }

        let total = self.tasks.count().await?;
        if total >= self.max_tasks {
            tracing::warn!(total, limit = self.max_tasks, "task limit reached");
            return Err(TaskServiceError::CapacityExceeded {
                limit: self.max_tasks,
            });
        }

        let task = self
            .tasks
            .store(&NewTask::new(task_list_id, task_name, priority, effort))
            .await?;
        tracing::info!(task_id = %task.id(), task_list_id = %task_list_id, "task created");
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when the task does not exist.
    pub async fn get_task(&self, task_id: TaskId) -> TaskServiceResult<Task> {
        self.tasks
            .find_by_id(task_id)
            .await?
            .ok_or(TaskServiceError::TaskNotFound(task_id))
    }

    /// Lists tasks matching the request's filters in the requested order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskListNotFound`] when the request is
    /// scoped to a missing task list, or
    /// [`TaskRepositoryError::InvalidSortField`] (wrapped) when a sort field
    /// is unknown.
    pub async fn list_tasks(&self, request: &ListTasksRequest) -> TaskServiceResult<Vec<Task>> {
        if let Some(task_list_id) = request.task_list_id()
            && !self.task_lists.exists(task_list_id).await?
        {
            return Err(TaskServiceError::TaskListNotFound(task_list_id));
        }

        let filter = request.filter();
        let order = request.sort_order();
        tracing::debug!(?filter, ?order, "listing tasks");
        Ok(self.tasks.find_matching(&filter, &order).await?)
    }

    /// Overwrites a task's lifecycle state.
    ///
    /// Any state may be set from any other; repeating an update is harmless.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when the task does not exist.
    pub async fn update_status(
        &self,
        task_id: TaskId,
        state: TaskState,
    ) -> TaskServiceResult<Task> {
        let _gate = self.write_gate.lock().await;
        let mut task = self.get_task(task_id).await?;
        task.set_state(state);
        self.tasks.update(&task).await?;
        tracing::info!(task_id = %task_id, state = %state, "task state updated");
        Ok(task)
    }

    /// Moves a task to another task list.
    ///
    /// Moving a task to the list it already belongs to succeeds without
    /// changing it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when the task does not exist,
    /// or [`TaskServiceError::TargetTaskListNotFound`] when the destination
    /// list does not exist. The task is left unchanged on failure.
    pub async fn move_task(
        &self,
        task_id: TaskId,
        target_task_list_id: TaskListId,
    ) -> TaskServiceResult<Task> {
        let _gate = self.write_gate.lock().await;
        let mut task = self.get_task(task_id).await?;
        if !self.task_lists.exists(target_task_list_id).await? {
            return Err(TaskServiceError::TargetTaskListNotFound(
                target_task_list_id,
            ));
        }

        let source_task_list_id = task.task_list_id();
        task.move_to(target_task_list_id);
        self.tasks.update(&task).await?;
        tracing::info!(
            task_id = %task_id,
            from = %source_task_list_id,
            to = %target_task_list_id,
            "task moved"
        );
        Ok(task)
    }

    /// Deletes a task permanently.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when the task does not exist.
    pub async fn delete_task(&self, task_id: TaskId) -> TaskServiceResult<()> {
        let _gate = self.write_gate.lock().await;
        if !self.tasks.exists(task_id).await? {
            return Err(TaskServiceError::TaskNotFound(task_id));
        }
        self.tasks.delete(task_id).await?;
        tracing::info!(task_id = %task_id, "task deleted");
        Ok(())
    }
}

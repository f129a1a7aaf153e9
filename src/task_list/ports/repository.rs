//! Repository port for task list persistence and lookup.

use crate::task_list::domain::{NewTaskList, TaskList, TaskListId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task list repository operations.
pub type TaskListRepositoryResult<T> = Result<T, TaskListRepositoryError>;

/// Task list persistence contract.
#[async_trait]
pub trait TaskListRepository: Send + Sync {
    /// Stores a new task list and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::Persistence`] when the store rejects
    /// the write.
    async fn store(&self, task_list: &NewTaskList) -> TaskListRepositoryResult<TaskList>;

    /// Finds a task list by identifier.
    ///
    /// Returns `None` when the task list does not exist.
    async fn find_by_id(&self, id: TaskListId) -> TaskListRepositoryResult<Option<TaskList>>;

    /// Returns `true` when a task list with the identifier exists.
    async fn exists(&self, id: TaskListId) -> TaskListRepositoryResult<bool>;

    /// Removes a task list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::NotFound`] when the task list does
    /// not exist.
    async fn delete(&self, id: TaskListId) -> TaskListRepositoryResult<()>;

    /// Returns every task list ordered by identifier.
    async fn find_all(&self) -> TaskListRepositoryResult<Vec<TaskList>>;
}

/// Errors returned by task list repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskListRepositoryError {
    /// The task list was not found.
    #[error("task list not found: {0}")]
    NotFound(TaskListId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskListRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

//! Repository port for task persistence, lookup and filtered queries.

use crate::task::domain::{NewTask, SortOrder, Task, TaskFilter, TaskId, UnknownTaskField};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store rejects
    /// the write.
    async fn store(&self, task: &NewTask) -> TaskRepositoryResult<Task>;

    /// Persists changes to an existing task (state, owning list).
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns `true` when a task with the identifier exists.
    async fn exists(&self, id: TaskId) -> TaskRepositoryResult<bool>;

    /// Removes a task permanently.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Returns the number of stored tasks across all task lists.
    async fn count(&self) -> TaskRepositoryResult<u64>;

    /// Returns every task ordered by identifier.
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.find_matching(&TaskFilter::unrestricted(), &SortOrder::default())
            .await
    }

    /// Returns the tasks satisfying `filter`, ordered by `order`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::InvalidSortField`] when `order` names a
    /// field tasks do not have.
    async fn find_matching(
        &self,
        filter: &TaskFilter,
        order: &SortOrder,
    ) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// A sort key names an unknown field.
    #[error(transparent)]
    InvalidSortField(#[from] UnknownTaskField),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

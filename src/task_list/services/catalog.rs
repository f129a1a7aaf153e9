//! Service layer for creating, listing and removing task lists.

use crate::error::ErrorKind;
use crate::task_list::{
    domain::{NewTaskList, TaskList, TaskListDomainError, TaskListId, TaskListName},
    ports::{TaskListRepository, TaskListRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskListRequest {
    name: String,
}

impl CreateTaskListRequest {
    /// Creates a request with the task list name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Service-level errors for task list operations.
#[derive(Debug, Error)]
pub enum TaskListServiceError {
    /// The task list does not exist.
    #[error("TaskList not found with id: {0}")]
    NotFound(TaskListId),
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskListDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskListRepositoryError),
}

impl TaskListServiceError {
    /// Classifies the error for the presentation layer.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) | Self::Repository(TaskListRepositoryError::NotFound(_)) => {
                ErrorKind::NotFound
            }
            Self::Domain(_) => ErrorKind::InvalidArgument,
            Self::Repository(TaskListRepositoryError::Persistence(_)) => ErrorKind::Unexpected,
        }
    }
}

/// Result type for task list service operations.
pub type TaskListServiceResult<T> = Result<T, TaskListServiceError>;

/// Task list orchestration service.
pub struct TaskListService<L>
where
    L: TaskListRepository,
{
    repository: Arc<L>,
}

impl<L> Clone for TaskListService<L>
where
    L: TaskListRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<L> TaskListService<L>
where
    L: TaskListRepository,
{
    /// Creates a new task list service.
    #[must_use]
    pub const fn new(repository: Arc<L>) -> Self {
        Self { repository }
    }

    /// Creates and persists a task list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListServiceError::Domain`] when the name is blank, or
    /// [`TaskListServiceError::Repository`] when persistence fails.
    pub async fn create(&self, request: CreateTaskListRequest) -> TaskListServiceResult<TaskList> {
        let name = TaskListName::new(request.name)?;
        let created = self.repository.store(&NewTaskList::new(name)).await?;
        tracing::info!(task_list_id = %created.id(), name = %created.name(), "task list created");
        Ok(created)
    }

    /// Returns every task list ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn list_all(&self) -> TaskListServiceResult<Vec<TaskList>> {
        Ok(self.repository.find_all().await?)
    }

    /// Retrieves a task list by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListServiceError::NotFound`] when the task list does not
    /// exist.
    pub async fn get(&self, id: TaskListId) -> TaskListServiceResult<TaskList> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskListServiceError::NotFound(id))
    }

    /// Deletes a task list.
    ///
    /// Tasks referencing the list are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListServiceError::NotFound`] when the task list does not
    /// exist.
    pub async fn delete(&self, id: TaskListId) -> TaskListServiceResult<()> {
        if !self.repository.exists(id).await? {
            return Err(TaskListServiceError::NotFound(id));
        }
        self.repository.delete(id).await?;
        tracing::info!(task_list_id = %id, "task list deleted");
        Ok(())
    }
}

//! In-memory repository for task lists.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::task_list::{
    domain::{NewTaskList, TaskList, TaskListId},
    ports::{TaskListRepository, TaskListRepositoryError, TaskListRepositoryResult},
};

/// Thread-safe in-memory task list repository.
///
/// Identifiers are assigned from a monotonically increasing sequence starting
/// at 1 and are never reused.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskListRepository {
    state: Arc<RwLock<InMemoryTaskListState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskListState {
    last_id: i64,
    task_lists: BTreeMap<TaskListId, TaskList>,
}

impl InMemoryTaskListRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl ToString) -> TaskListRepositoryError {
    TaskListRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskListRepository for InMemoryTaskListRepository {
    async fn store(&self, task_list: &NewTaskList) -> TaskListRepositoryResult<TaskList> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.last_id += 1;
        let stored = task_list.clone().with_id(TaskListId::new(state.last_id));
        state.task_lists.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: TaskListId) -> TaskListRepositoryResult<Option<TaskList>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.task_lists.get(&id).cloned())
    }

    async fn exists(&self, id: TaskListId) -> TaskListRepositoryResult<bool> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.task_lists.contains_key(&id))
    }

    async fn delete(&self, id: TaskListId) -> TaskListRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state
            .task_lists
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskListRepositoryError::NotFound(id))
    }

    async fn find_all(&self) -> TaskListRepositoryResult<Vec<TaskList>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.task_lists.values().cloned().collect())
    }
}

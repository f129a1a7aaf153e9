//! Task aggregate root and related task lifecycle types.

use super::{Effort, ParseEnumError, Priority, TaskDomainError, TaskId};
use crate::task_list::domain::TaskListId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length for a task name, matching the `VARCHAR(255)` column.
const MAX_NAME_LENGTH: usize = 255;

/// Task lifecycle state.
///
/// Transitions are unrestricted: any state may be set from any other,
/// including itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskState {
    /// Task has been created and is not finished.
    Pending,
    /// Task has been completed.
    Done,
}

impl TaskState {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Done => "DONE",
        }
    }

    /// Returns the storage rank.
    #[must_use]
    pub const fn rank(self) -> i16 {
        match self {
            Self::Pending => 0,
            Self::Done => 1,
        }
    }

    /// Restores a state from its storage rank.
    ///
    /// # Errors
    ///
    /// Returns [`ParseEnumError`] when the rank is out of range.
    pub fn from_rank(rank: i16) -> Result<Self, ParseEnumError> {
        match rank {
            0 => Ok(Self::Pending),
            1 => Ok(Self::Done),
            other => Err(ParseEnumError::new("task state", other.to_string())),
        }
    }
}

impl TryFrom<&str> for TaskState {
    type Error = ParseEnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "DONE" => Ok(Self::Done),
            _ => Err(ParseEnumError::new("task state", value)),
        }
    }
}

impl FromStr for TaskState {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value)
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trimmed, non-empty task name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskName(String);

impl TaskName {
    /// Creates a validated task name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskName`] when the value is empty
    /// after trimming, or [`TaskDomainError::TaskNameTooLong`] when it exceeds
    /// 255 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();

        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyTaskName);
        }
        if normalized.chars().count() > MAX_NAME_LENGTH {
            return Err(TaskDomainError::TaskNameTooLong {
                max: MAX_NAME_LENGTH,
            });
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A task that has not been persisted yet.
///
/// New tasks always start in [`TaskState::Pending`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    task_list_id: TaskListId,
    name: TaskName,
    priority: Priority,
    effort: Effort,
}

impl NewTask {
    /// Creates an unsaved task owned by `task_list_id`.
    #[must_use]
    pub const fn new(
        task_list_id: TaskListId,
        name: TaskName,
        priority: Priority,
        effort: Effort,
    ) -> Self {
        Self {
            task_list_id,
            name,
            priority,
            effort,
        }
    }

    /// Returns the owning task list identifier.
    #[must_use]
    pub const fn task_list_id(&self) -> TaskListId {
        self.task_list_id
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the task effort estimate.
    #[must_use]
    pub const fn effort(&self) -> Effort {
        self.effort
    }

    /// Returns the initial lifecycle state.
    #[must_use]
    pub const fn state(&self) -> TaskState {
        TaskState::Pending
    }

    /// Attaches the store-assigned identifier.
    #[must_use]
    pub fn with_id(self, id: TaskId) -> Task {
        Task {
            id,
            task_list_id: self.task_list_id,
            name: self.name,
            state: TaskState::Pending,
            priority: self.priority,
            effort: self.effort,
        }
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    task_list_id: TaskListId,
    name: TaskName,
    state: TaskState,
    priority: Priority,
    effort: Effort,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning task list.
    pub task_list_id: TaskListId,
    /// Persisted name.
    pub name: TaskName,
    /// Persisted lifecycle state.
    pub state: TaskState,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted effort estimate.
    pub effort: Effort,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            task_list_id: data.task_list_id,
            name: data.name,
            state: data.state,
            priority: data.priority,
            effort: data.effort,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning task list identifier.
    #[must_use]
    pub const fn task_list_id(&self) -> TaskListId {
        self.task_list_id
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> TaskState {
        self.state
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the task effort estimate.
    #[must_use]
    pub const fn effort(&self) -> Effort {
        self.effort
    }

    /// Overwrites the lifecycle state.
    pub const fn set_state(&mut self, state: TaskState) {
        self.state = state;
    }

    /// Reassigns the task to another task list.
    pub const fn move_to(&mut self, task_list_id: TaskListId) {
        self.task_list_id = task_list_id;
    }
}

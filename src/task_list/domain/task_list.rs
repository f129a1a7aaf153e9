//! Task list aggregate and its validated name.

use super::{TaskListDomainError, TaskListId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a task list name, matching the `VARCHAR(255)` column.
const MAX_NAME_LENGTH: usize = 255;

/// Trimmed, non-empty task list name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskListName(String);

impl TaskListName {
    /// Creates a validated task list name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListDomainError::EmptyName`] when the value is empty after
    /// trimming, or [`TaskListDomainError::NameTooLong`] when it exceeds 255
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskListDomainError> {
        let raw = value.into();
        let normalized = raw.trim();

        if normalized.is_empty() {
            return Err(TaskListDomainError::EmptyName);
        }
        if normalized.chars().count() > MAX_NAME_LENGTH {
            return Err(TaskListDomainError::NameTooLong {
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

impl AsRef<str> for TaskListName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskListName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A task list that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskList {
    name: TaskListName,
}

impl NewTaskList {
    /// Creates an unsaved task list.
    #[must_use]
    pub const fn new(name: TaskListName) -> Self {
        Self { name }
    }

    /// Returns the task list name.
    #[must_use]
    pub const fn name(&self) -> &TaskListName {
        &self.name
    }

    /// Attaches the store-assigned identifier.
    #[must_use]
    pub fn with_id(self, id: TaskListId) -> TaskList {
        TaskList {
            id,
            name: self.name,
        }
    }
}

/// Persisted task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    id: TaskListId,
    name: TaskListName,
}

impl TaskList {
    /// Reconstructs a task list from persisted storage.
    #[must_use]
    pub const fn from_persisted(id: TaskListId, name: TaskListName) -> Self {
        Self { id, name }
    }

    /// Returns the task list identifier.
    #[must_use]
    pub const fn id(&self) -> TaskListId {
        self.id
    }

    /// Returns the task list name.
    #[must_use]
    pub const fn name(&self) -> &TaskListName {
        &self.name
    }
}

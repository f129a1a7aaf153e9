//! Request and response bodies for the HTTP API.
//!
//! Request bodies keep every field optional so that missing fields surface
//! as `"<field>: <message>"` validation errors instead of body rejections.

use super::error::ApiError;
use crate::task::domain::{Effort, Priority, Task, TaskState, parse_csv};
use crate::task::services::{CreateTaskRequest, ListTasksRequest};
use crate::task_list::domain::{TaskList, TaskListId};
use crate::task_list::services::CreateTaskListRequest;
use serde::{Deserialize, Serialize};

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|text| text.trim().is_empty())
}

/// Body of `POST /task-lists`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTaskListBody {
    /// Task list name.
    pub name: Option<String>,
}

impl CreateTaskListBody {
    /// Validates the body into a service request.
    ///
    /// # Errors
    ///
    /// Returns a 400 [`ApiError`] when the name is missing or blank.
    pub fn validate(self) -> Result<CreateTaskListRequest, ApiError> {
        match self.name {
            Some(name) if !name.trim().is_empty() => Ok(CreateTaskListRequest::new(name)),
            _ => Err(ApiError::field("name", "Task list name must not be blank")),
        }
    }
}

/// Body of `POST /task-lists/{id}/tasks`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTaskBody {
    /// Task name.
    pub name: Option<String>,
    /// Priority token, e.g. `HIGH`.
    pub priority: Option<String>,
    /// Effort token, e.g. `LOW`.
    pub effort: Option<String>,
}

impl CreateTaskBody {
    /// Validates the body into a service request.
    ///
    /// Missing fields are reported first, in declaration order; unknown
    /// enum tokens are reported after that.
    ///
    /// # Errors
    ///
    /// Returns a 400 [`ApiError`] naming the first invalid field, or the
    /// generic invalid-parameter error for an unknown token.
    pub fn validate(self) -> Result<CreateTaskRequest, ApiError> {
        if is_blank(self.name.as_deref()) {
            return Err(ApiError::field("name", "Task name must not be blank"));
        }
        let priority = self
            .priority
            .ok_or_else(|| ApiError::field("priority", "Priority is required"))?;
        let effort = self
            .effort
            .ok_or_else(|| ApiError::field("effort", "Effort is required"))?;
        let name = self.name.unwrap_or_default();
        Ok(CreateTaskRequest::new(
            name,
            priority.parse::<Priority>()?,
            effort.parse::<Effort>()?,
        ))
    }
}

/// Body of `PATCH /tasks/{id}/status`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStatusBody {
    /// State token, `PENDING` or `DONE`.
    pub state: Option<String>,
}

impl UpdateStatusBody {
    /// Validates the body into a target state.
    ///
    /// # Errors
    ///
    /// Returns a 400 [`ApiError`] when the state is missing or unknown.
    pub fn validate(self) -> Result<TaskState, ApiError> {
        let state = self
            .state
            .ok_or_else(|| ApiError::field("state", "State is required"))?;
        Ok(state.parse::<TaskState>()?)
    }
}

/// Body of `PATCH /tasks/{id}/move`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveTaskBody {
    /// Destination task list identifier.
    pub target_task_list_id: Option<i64>,
}

impl MoveTaskBody {
    /// Validates the body into a destination identifier.
    ///
    /// # Errors
    ///
    /// Returns a 400 [`ApiError`] when the destination is missing.
    pub fn validate(self) -> Result<TaskListId, ApiError> {
        self.target_task_list_id
            .map(TaskListId::new)
            .ok_or_else(|| ApiError::field("targetTaskListId", "Target taskListId is required"))
    }
}

/// Query string accepted by the task listing routes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskQueryParams {
    /// Comma-separated priority tokens.
    pub priorities: Option<String>,
    /// Comma-separated effort tokens.
    pub efforts: Option<String>,
    /// Comma-separated sort fields.
    pub sort_by: Option<String>,
    /// `asc` (default) or `desc`.
    pub sort_direction: Option<String>,
}

impl TaskQueryParams {
    /// Applies the parameters to a scoped or global listing request.
    ///
    /// # Errors
    ///
    /// Returns the invalid-parameter [`ApiError`] for an unknown enum token.
    pub fn apply(self, base: ListTasksRequest) -> Result<ListTasksRequest, ApiError> {
        let priorities = parse_csv::<Priority>(self.priorities.as_deref())?;
        let efforts = parse_csv::<Effort>(self.efforts.as_deref())?;
        let mut request = base.with_priorities(priorities).with_efforts(efforts);
        if let Some(sort_by) = self.sort_by {
            request = request.sorted_by(sort_by);
        }
        if let Some(direction) = self.sort_direction {
            request = request.with_direction(direction);
        }
        Ok(request)
    }
}

/// Task list representation returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListResponse {
    /// Task list identifier.
    pub id: i64,
    /// Task list name.
    pub name: String,
}

impl From<&TaskList> for TaskListResponse {
    fn from(task_list: &TaskList) -> Self {
        Self {
            id: task_list.id().value(),
            name: task_list.name().as_str().to_owned(),
        }
    }
}

/// Task representation returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Task identifier.
    pub id: i64,
    /// Owning task list identifier.
    pub task_list_id: i64,
    /// Task name.
    pub name: String,
    /// Lifecycle state.
    pub state: TaskState,
    /// Priority.
    pub priority: Priority,
    /// Effort estimate.
    pub effort: Effort,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().value(),
            task_list_id: task.task_list_id().value(),
            name: task.name().as_str().to_owned(),
            state: task.state(),
            priority: task.priority(),
            effort: task.effort(),
        }
    }
}

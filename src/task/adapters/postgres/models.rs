//! Diesel row models for task persistence.

use super::schema::tasks;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Owning task list identifier.
    pub task_list_id: i64,
    /// Task name.
    pub name: String,
    /// Lifecycle state rank.
    pub state: i16,
    /// Priority rank.
    pub priority: i16,
    /// Effort rank.
    pub effort: i16,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Owning task list identifier.
    pub task_list_id: i64,
    /// Task name.
    pub name: String,
    /// Lifecycle state rank.
    pub state: i16,
    /// Priority rank.
    pub priority: i16,
    /// Effort rank.
    pub effort: i16,
}

/// Changeset for task updates.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// Owning task list identifier.
    pub task_list_id: i64,
    /// Lifecycle state rank.
    pub state: i16,
}

//! Diesel row models for task list persistence.

use super::schema::task_lists;
use diesel::prelude::*;

/// Query result row for task list records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = task_lists)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskListRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Task list name.
    pub name: String,
}

/// Insert model for task list records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = task_lists)]
pub struct NewTaskListRow {
    /// Task list name.
    pub name: String,
}

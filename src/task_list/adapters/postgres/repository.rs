//! `PostgreSQL` repository implementation for task list storage.

use super::{
    models::{NewTaskListRow, TaskListRow},
    schema::task_lists,
};
use crate::postgres::PgPool;
use crate::task_list::{
    domain::{NewTaskList, TaskList, TaskListId, TaskListName},
    ports::{TaskListRepository, TaskListRepositoryError, TaskListRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// `PostgreSQL`-backed task list repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskListRepository {
    pool: PgPool,
}

impl PostgresTaskListRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskListRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskListRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskListRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskListRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskListRepository for PostgresTaskListRepository {
    async fn store(&self, task_list: &NewTaskList) -> TaskListRepositoryResult<TaskList> {
        let new_row = NewTaskListRow {
            name: task_list.name().as_str().to_owned(),
        };
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(task_lists::table)
                .values(&new_row)
                .returning(TaskListRow::as_returning())
                .get_result::<TaskListRow>(connection)
                .map_err(TaskListRepositoryError::persistence)?;
            row_to_task_list(row)
        })
        .await
    }

    async fn find_by_id(&self, id: TaskListId) -> TaskListRepositoryResult<Option<TaskList>> {
        self.run_blocking(move |connection| {
            let row = task_lists::table
                .filter(task_lists::id.eq(id.value()))
                .select(TaskListRow::as_select())
                .first::<TaskListRow>(connection)
                .optional()
                .map_err(TaskListRepositoryError::persistence)?;
            row.map(row_to_task_list).transpose()
        })
        .await
    }

    async fn exists(&self, id: TaskListId) -> TaskListRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            diesel::select(diesel::dsl::exists(
                task_lists::table.filter(task_lists::id.eq(id.value())),
            ))
            .get_result::<bool>(connection)
            .map_err(TaskListRepositoryError::persistence)
        })
        .await
    }

    async fn delete(&self, id: TaskListId) -> TaskListRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted =
                diesel::delete(task_lists::table.filter(task_lists::id.eq(id.value())))
                    .execute(connection)
                    .map_err(TaskListRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(TaskListRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_all(&self) -> TaskListRepositoryResult<Vec<TaskList>> {
        self.run_blocking(|connection| {
            let rows = task_lists::table
                .order(task_lists::id.asc())
                .select(TaskListRow::as_select())
                .load::<TaskListRow>(connection)
                .map_err(TaskListRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task_list).collect()
        })
        .await
    }
}

fn row_to_task_list(row: TaskListRow) -> TaskListRepositoryResult<TaskList> {
    let name = TaskListName::new(row.name).map_err(TaskListRepositoryError::persistence)?;
    Ok(TaskList::from_persisted(TaskListId::new(row.id), name))
}

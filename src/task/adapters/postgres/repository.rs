//! `PostgreSQL` repository implementation for task lifecycle storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::postgres::PgPool;
use crate::task::{
    domain::{
        Effort, FilterClause, NewTask, PersistedTaskData, Priority, SortDirection, SortOrder,
        Task, TaskField, TaskFilter, TaskId, TaskName, TaskState,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use crate::task_list::domain::TaskListId;
use async_trait::async_trait;
use diesel::pg::{Pg, PgConnection};
use diesel::prelude::*;

type TaskQuery = tasks::BoxedQuery<'static, Pg>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &NewTask) -> TaskRepositoryResult<Task> {
        let new_row = NewTaskRow {
            task_list_id: task.task_list_id().value(),
            name: task.name().as_str().to_owned(),
            state: task.state().rank(),
            priority: task.priority().rank(),
            effort: task.effort().rank(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .get_result::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            row_to_task(row)
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let changeset = TaskChangeset {
            task_list_id: task.task_list_id().value(),
            state: task.state().rank(),
        };

        self.run_blocking(move |connection| {
            let updated = diesel::update(tasks::table.find(task_id.value()))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if updated == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.value())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn exists(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            diesel::select(diesel::dsl::exists(tasks::table.find(id.value())))
                .get_result::<bool>(connection)
                .map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(tasks::table.find(id.value()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn count(&self) -> TaskRepositoryResult<u64> {
        self.run_blocking(|connection| {
            let total = tasks::table
                .count()
                .get_result::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            u64::try_from(total).map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn find_matching(
        &self,
        filter: &TaskFilter,
        order: &SortOrder,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let keys = order.resolve()?;
        let clauses = filter.clauses().to_vec();

        self.run_blocking(move |connection| {
            let query = apply_order(apply_filter(tasks::table.into_boxed(), &clauses), &keys);
            let rows = query
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

fn apply_filter(query: TaskQuery, clauses: &[FilterClause]) -> TaskQuery {
    clauses
        .iter()
        .fold(query, |query, clause| match clause {
            FilterClause::TaskList(id) => query.filter(tasks::task_list_id.eq(id.value())),
            FilterClause::PriorityIn(priorities) => {
                let ranks: Vec<i16> = priorities.iter().map(|p| p.rank()).collect();
                query.filter(tasks::priority.eq_any(ranks))
            }
            FilterClause::EffortIn(efforts) => {
                let ranks: Vec<i16> = efforts.iter().map(|e| e.rank()).collect();
                query.filter(tasks::effort.eq_any(ranks))
            }
        })
}

fn apply_order(query: TaskQuery, keys: &[(TaskField, SortDirection)]) -> TaskQuery {
    keys.iter()
        .fold(query, |query, (field, direction)| match direction {
            SortDirection::Ascending => match field {
                TaskField::Id => query.then_order_by(tasks::id.asc()),
                TaskField::TaskListId => query.then_order_by(tasks::task_list_id.asc()),
                TaskField::Name => query.then_order_by(tasks::name.asc()),
                TaskField::State => query.then_order_by(tasks::state.asc()),
                TaskField::Priority => query.then_order_by(tasks::priority.asc()),
                TaskField::Effort => query.then_order_by(tasks::effort.asc()),
            },
            SortDirection::Descending => match field {
                TaskField::Id => query.then_order_by(tasks::id.desc()),
                TaskField::TaskListId => query.then_order_by(tasks::task_list_id.desc()),
                TaskField::Name => query.then_order_by(tasks::name.desc()),
                TaskField::State => query.then_order_by(tasks::state.desc()),
                TaskField::Priority => query.then_order_by(tasks::priority.desc()),
                TaskField::Effort => query.then_order_by(tasks::effort.desc()),
            },
        })
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        task_list_id,
        name,
        state,
        priority,
        effort,
    } = row;

    let data = PersistedTaskData {
        id: TaskId::new(id),
        task_list_id: TaskListId::new(task_list_id),
        name: TaskName::new(name).map_err(TaskRepositoryError::persistence)?,
        state: TaskState::from_rank(state).map_err(TaskRepositoryError::persistence)?,
        priority: Priority::from_rank(priority).map_err(TaskRepositoryError::persistence)?,
        effort: Effort::from_rank(effort).map_err(TaskRepositoryError::persistence)?,
    };
    Ok(Task::from_persisted(data))
}

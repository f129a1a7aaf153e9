//! HTTP presentation layer.
//!
//! Exposes the task list and task services as a JSON API nested under
//! `/api`. Handlers are generic over the repository adapters so the same
//! router serves in-memory and `PostgreSQL` storage.

pub mod dto;
pub mod error;
mod handlers;

pub use error::ApiError;

use crate::task::ports::TaskRepository;
use crate::task::services::TaskService;
use crate::task_list::ports::TaskListRepository;
use crate::task_list::services::TaskListService;
use axum::{
    Router,
    routing::{get, patch},
};
use std::sync::Arc;

/// Shared handler state holding both services.
pub struct AppState<T, L>
where
    T: TaskRepository,
    L: TaskListRepository,
{
    /// Task lifecycle service.
    pub tasks: TaskService<T, L>,
    /// Task list service.
    pub task_lists: TaskListService<L>,
}

impl<T, L> Clone for AppState<T, L>
where
    T: TaskRepository,
    L: TaskListRepository,
{
    fn clone(&self) -> Self {
        Self {
            tasks: self.tasks.clone(),
            task_lists: self.task_lists.clone(),
        }
    }
}

impl<T, L> AppState<T, L>
where
    T: TaskRepository,
    L: TaskListRepository,
{
    /// Wires both services over shared repositories.
    #[must_use]
    pub fn new(tasks: Arc<T>, task_lists: Arc<L>, max_tasks: u64) -> Self {
        Self {
            tasks: TaskService::with_max_tasks(tasks, Arc::clone(&task_lists), max_tasks),
            task_lists: TaskListService::new(task_lists),
        }
    }
}

/// Builds the API router.
pub fn router<T, L>(state: AppState<T, L>) -> Router
where
    T: TaskRepository + 'static,
    L: TaskListRepository + 'static,
{
    let api = Router::new()
        .route(
            "/task-lists",
            get(handlers::list_task_lists::<T, L>).post(handlers::create_task_list::<T, L>),
        )
        .route(
            "/task-lists/{id}",
            get(handlers::get_task_list::<T, L>).delete(handlers::delete_task_list::<T, L>),
        )
        .route(
            "/task-lists/{id}/tasks",
            get(handlers::list_tasks_in_list::<T, L>).post(handlers::create_task::<T, L>),
        )
        .route("/tasks", get(handlers::list_all_tasks::<T, L>))
        .route(
            "/tasks/{id}",
            get(handlers::get_task::<T, L>).delete(handlers::delete_task::<T, L>),
        )
        .route(
            "/tasks/{id}/status",
            patch(handlers::update_task_status::<T, L>),
        )
        .route("/tasks/{id}/move", patch(handlers::move_task::<T, L>))
        .with_state(state);

    Router::new().nest("/api", api)
}

//! Route handlers translating HTTP requests into service calls.

use super::AppState;
use super::dto::{
    CreateTaskBody, CreateTaskListBody, MoveTaskBody, TaskListResponse, TaskQueryParams,
    TaskResponse, UpdateStatusBody,
};
use super::error::ApiError;
use crate::task::domain::{Task, TaskId};
use crate::task::ports::TaskRepository;
use crate::task::services::ListTasksRequest;
use crate::task_list::domain::TaskListId;
use crate::task_list::ports::TaskListRepository;
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};

type Created<T> = (StatusCode, Json<T>);
type ApiResult<T> = Result<T, ApiError>;

fn task_responses(tasks: &[Task]) -> Json<Vec<TaskResponse>> {
    Json(tasks.iter().map(TaskResponse::from).collect())
}

pub(super) async fn create_task_list<T, L>(
    State(state): State<AppState<T, L>>,
    payload: Result<Json<CreateTaskListBody>, JsonRejection>,
) -> ApiResult<Created<TaskListResponse>>
where
    T: TaskRepository + 'static,
    L: TaskListRepository + 'static,
{
    let Json(body) = payload?;
    let created = state.task_lists.create(body.validate()?).await?;
    Ok((StatusCode::CREATED, Json(TaskListResponse::from(&created))))
}

pub(super) async fn list_task_lists<T, L>(
    State(state): State<AppState<T, L>>,
) -> ApiResult<Json<Vec<TaskListResponse>>>
where
    T: TaskRepository + 'static,
    L: TaskListRepository + 'static,
{
    let task_lists = state.task_lists.list_all().await?;
    Ok(Json(task_lists.iter().map(TaskListResponse::from).collect()))
}

pub(super) async fn get_task_list<T, L>(
    State(state): State<AppState<T, L>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<TaskListResponse>>
where
    T: TaskRepository + 'static,
    L: TaskListRepository + 'static,
{
    let Path(id) = path?;
    let task_list = state.task_lists.get(TaskListId::new(id)).await?;
    Ok(Json(TaskListResponse::from(&task_list)))
}

pub(super) async fn delete_task_list<T, L>(
    State(state): State<AppState<T, L>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode>
where
    T: TaskRepository + 'static,
    L: TaskListRepository + 'static,
{
    let Path(id) = path?;
    state.task_lists.delete(TaskListId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub(super) async fn create_task<T, L>(
    State(state): State<AppState<T, L>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CreateTaskBody>, JsonRejection>,
) -> ApiResult<Created<TaskResponse>>
where
    T: TaskRepository + 'static,
    L: TaskListRepository + 'static,
{
    let Path(id) = path?;
    let Json(body) = payload?;
    let task = state
        .tasks
        .create_task(TaskListId::new(id), body.validate()?)
        .await?;
    Ok((StatusCode::CREATED, Json(TaskResponse::from(&task))))
}

pub(super) async fn list_tasks_in_list<T, L>(
    State(state): State<AppState<T, L>>,
    path: Result<Path<i64>, PathRejection>,
    query: Result<Query<TaskQueryParams>, QueryRejection>,
) -> ApiResult<Json<Vec<TaskResponse>>>
where
    T: TaskRepository + 'static,
    L: TaskListRepository + 'static,
{
    let Path(id) = path?;
    let Query(params) = query?;
    let request = params.apply(ListTasksRequest::in_task_list(TaskListId::new(id)))?;
    let tasks = state.tasks.list_tasks(&request).await?;
    Ok(task_responses(&tasks))
}

pub(super) async fn list_all_tasks<T, L>(
    State(state): State<AppState<T, L>>,
    query: Result<Query<TaskQueryParams>, QueryRejection>,
) -> ApiResult<Json<Vec<TaskResponse>>>
where
    T: TaskRepository + 'static,
    L: TaskListRepository + 'static,
{
    let Query(params) = query?;
    let request = params.apply(ListTasksRequest::all())?;
    let tasks = state.tasks.list_tasks(&request).await?;
    Ok(task_responses(&tasks))
}

pub(super) async fn get_task<T, L>(
    State(state): State<AppState<T, L>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<TaskResponse>>
where
    T: TaskRepository + 'static,
    L: TaskListRepository + 'static,
{
    let Path(id) = path?;
    let task = state.tasks.get_task(TaskId::new(id)).await?;
    Ok(Json(TaskResponse::from(&task)))
}

pub(super) async fn update_task_status<T, L>(
    State(state): State<AppState<T, L>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateStatusBody>, JsonRejection>,
) -> ApiResult<Json<TaskResponse>>
where
    T: TaskRepository + 'static,
    L: TaskListRepository + 'static,
{
    let Path(id) = path?;
    let Json(body) = payload?;
    let task = state
        .tasks
        .update_status(TaskId::new(id), body.validate()?)
        .await?;
    Ok(Json(TaskResponse::from(&task)))
}

pub(super) async fn move_task<T, L>(
    State(state): State<AppState<T, L>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<MoveTaskBody>, JsonRejection>,
) -> ApiResult<Json<TaskResponse>>
where
    T: TaskRepository + 'static,
    L: TaskListRepository + 'static,
{
    let Path(id) = path?;
    let Json(body) = payload?;
    let task = state
        .tasks
        .move_task(TaskId::new(id), body.validate()?)
        .await?;
    Ok(Json(TaskResponse::from(&task)))
}

pub(super) async fn delete_task<T, L>(
    State(state): State<AppState<T, L>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode>
where
    T: TaskRepository + 'static,
    L: TaskListRepository + 'static,
{
    let Path(id) = path?;
    state.tasks.delete_task(TaskId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

//! In-memory integration tests for task list and task workflows.

use super::helpers::{Board, board, ids, task_id};
use rstest::rstest;
use taskboard::error::ErrorKind;
use taskboard::task::{
    domain::{Effort, Priority, TaskState},
    services::ListTasksRequest,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_moves_between_lists_and_is_deleted(board: Board) -> Result<(), eyre::Report> {
    let work = board.list("Work").await?;
    let task = board
        .task(work, "Task1", Priority::High, Effort::Low)
        .await?;
    eyre::ensure!(task.state() == TaskState::Pending, "new task must be pending");

    let done = board.tasks.update_status(task.id(), TaskState::Done).await?;
    eyre::ensure!(done.state() == TaskState::Done, "state update must stick");

    let personal = board.list("Personal").await?;
    let moved = board.tasks.move_task(task.id(), personal).await?;
    eyre::ensure!(moved.task_list_id() == personal, "task must change list");

    let request = ListTasksRequest::in_task_list(personal)
        .with_priorities([Priority::High])
        .with_efforts([Effort::Low])
        .sorted_by("priority,effort")
        .with_direction("desc");
    let listed = board.tasks.list_tasks(&request).await?;
    eyre::ensure!(listed == [moved.clone()], "expected only the moved task, got {listed:?}");

    board.tasks.delete_task(task.id()).await?;
    let Err(err) = board.tasks.get_task(task.id()).await else {
        eyre::bail!("deleted task must not be retrievable");
    };
    eyre::ensure!(err.kind() == ErrorKind::NotFound, "expected NotFound, got {err}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_create_writes_nothing(board: Board) -> Result<(), eyre::Report> {
    let work = board.list("Work").await?;
    board.task(work, "kept", Priority::Low, Effort::Low).await?;

    let missing = taskboard::task_list::domain::TaskListId::new(404);
    let result = board.task(missing, "lost", Priority::Low, Effort::Low).await;
    eyre::ensure!(result.is_err(), "creation under a missing list must fail");

    let all = board.tasks.list_tasks(&ListTasksRequest::all()).await?;
    eyre::ensure!(ids(&all) == [1], "only the first task may exist, got {all:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_list_leaves_its_tasks_reachable(board: Board) -> Result<(), eyre::Report> {
    let scratch = board.list("Scratch").await?;
    let task = board
        .task(scratch, "orphan", Priority::Medium, Effort::Medium)
        .await?;

    board.task_lists.delete(scratch).await?;

    let fetched = board.tasks.get_task(task.id()).await?;
    eyre::ensure!(fetched.task_list_id() == scratch, "orphan keeps its list id");
    let scoped = board
        .tasks
        .list_tasks(&ListTasksRequest::in_task_list(scratch))
        .await;
    eyre::ensure!(scoped.is_err(), "listing a deleted list must fail");
    let global = board.tasks.list_tasks(&ListTasksRequest::all()).await?;
    eyre::ensure!(ids(&global) == [1], "orphan still appears globally");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_task_operations_report_not_found(board: Board) -> Result<(), eyre::Report> {
    let work = board.list("Work").await?;
    let missing = task_id(77);

    let results = [
        board.tasks.get_task(missing).await.map(|_| ()),
        board
            .tasks
            .update_status(missing, TaskState::Done)
            .await
            .map(|_| ()),
        board.tasks.move_task(missing, work).await.map(|_| ()),
        board.tasks.delete_task(missing).await,
    ];

    for result in results {
        let Err(err) = result else {
            eyre::bail!("operation on a missing task must fail");
        };
        eyre::ensure!(err.kind() == ErrorKind::NotFound, "expected NotFound, got {err}");
        eyre::ensure!(err.to_string() == "Task not found with id: 77", "message: {err}");
    }
    Ok(())
}

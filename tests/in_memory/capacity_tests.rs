//! In-memory integration tests for the global task limit.

use std::sync::Arc;

use super::helpers::Board;
use rstest::rstest;
use taskboard::error::ErrorKind;
use taskboard::task::{
    domain::{Effort, Priority},
    services::{CreateTaskRequest, ListTasksRequest, TaskServiceError},
};

async fn fill(board: &Board, count: u64) -> Result<(), eyre::Report> {
    let work = board.list("Work").await?;
    for index in 0..count {
        board
            .task(work, &format!("task {index}"), Priority::Low, Effort::Low)
            .await?;
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn fiftieth_task_succeeds_and_fifty_first_fails() -> Result<(), eyre::Report> {
    let board = Board::with_max_tasks(50);
    fill(&board, 49).await?;
    let other = board.list("Other").await?;

    board
        .task(other, "fiftieth", Priority::High, Effort::High)
        .await?;
    let overflow = board
        .tasks
        .create_task(
            other,
            CreateTaskRequest::new("fifty-first", Priority::High, Effort::High),
        )
        .await;

    let Err(err) = overflow else {
        eyre::bail!("the 51st task must be rejected");
    };
    eyre::ensure!(err.kind() == ErrorKind::CapacityExceeded, "got {err}");
    eyre::ensure!(
        err.to_string() == "Maximum task limit (50) reached",
        "message: {err}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn moving_tasks_does_not_consume_capacity() -> Result<(), eyre::Report> {
    let board = Board::with_max_tasks(2);
    let work = board.list("Work").await?;
    let personal = board.list("Personal").await?;
    let first = board.task(work, "first", Priority::Low, Effort::Low).await?;
    board.task(work, "second", Priority::Low, Effort::Low).await?;

    let moved = board.tasks.move_task(first.id(), personal).await?;

    eyre::ensure!(moved.task_list_id() == personal, "move should succeed at the limit");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creators_cannot_exceed_limit() -> Result<(), eyre::Report> {
    let board = Arc::new(Board::with_max_tasks(50));
    fill(&board, 48).await?;
    let target = board.list("Race").await?;

    let mut handles = Vec::new();
    for index in 0..5 {
        let racer = Arc::clone(&board);
        handles.push(tokio::spawn(async move {
            racer
                .tasks
                .create_task(
                    target,
                    CreateTaskRequest::new(format!("racer {index}"), Priority::Low, Effort::Low),
                )
                .await
        }));
    }

    let mut created = 0;
    let mut rejected = 0;
    for handle in handles {
        match handle.await? {
            Ok(_) => created += 1,
            Err(TaskServiceError::CapacityExceeded { limit: 50 }) => rejected += 1,
            Err(other) => eyre::bail!("unexpected failure: {other}"),
        }
    }

    eyre::ensure!(created == 2, "expected 2 successful creates, got {created}");
    eyre::ensure!(rejected == 3, "expected 3 rejections, got {rejected}");
    let all = board.tasks.list_tasks(&ListTasksRequest::all()).await?;
    eyre::ensure!(all.len() == 50, "store must hold exactly 50 tasks");
    Ok(())
}

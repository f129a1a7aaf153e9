//! In-memory integration tests for filtered and sorted task listings.

use super::helpers::{Board, board, ids};
use rstest::{fixture, rstest};
use taskboard::error::ErrorKind;
use taskboard::task::{
    domain::{Effort, Priority, TaskState},
    services::ListTasksRequest,
};
use taskboard::task_list::domain::TaskListId;

struct Seeded {
    board: Board,
    work: TaskListId,
    personal: TaskListId,
}

/// Seeds two lists:
///
/// | id | list     | name    | priority | effort |
/// |----|----------|---------|----------|--------|
/// | 1  | Work     | deploy  | HIGH     | HIGH   |
/// | 2  | Work     | email   | LOW      | LOW    |
/// | 3  | Work     | review  | HIGH     | LOW    |
/// | 4  | Personal | gym     | MEDIUM   | MEDIUM |
/// | 5  | Personal | bills   | HIGH     | LOW    |
#[fixture]
async fn seeded(board: Board) -> Seeded {
    let work = board.list("Work").await.expect("list should be created");
    let personal = board.list("Personal").await.expect("list should be created");
    let rows = [
        (work, "deploy", Priority::High, Effort::High),
        (work, "email", Priority::Low, Effort::Low),
        (work, "review", Priority::High, Effort::Low),
        (personal, "gym", Priority::Medium, Effort::Medium),
        (personal, "bills", Priority::High, Effort::Low),
    ];
    for (list, name, priority, effort) in rows {
        board
            .task(list, name, priority, effort)
            .await
            .expect("task should be created");
    }
    Seeded {
        board,
        work,
        personal,
    }
}

async fn listed(seeded: &Seeded, request: ListTasksRequest) -> Vec<i64> {
    let tasks = seeded
        .board
        .tasks
        .list_tasks(&request)
        .await
        .expect("listing should succeed");
    ids(&tasks)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unfiltered_listing_is_ordered_by_id(#[future] seeded: Seeded) {
    let seeded = seeded.await;

    assert_eq!(listed(&seeded, ListTasksRequest::all()).await, [1, 2, 3, 4, 5]);
    assert_eq!(
        listed(&seeded, ListTasksRequest::in_task_list(seeded.personal)).await,
        [4, 5]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn filters_combine_within_a_list(#[future] seeded: Seeded) {
    let seeded = seeded.await;
    let request = ListTasksRequest::in_task_list(seeded.work)
        .with_priorities([Priority::High])
        .with_efforts([Effort::Low, Effort::Medium]);

    assert_eq!(listed(&seeded, request).await, [3]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn global_filter_spans_lists(#[future] seeded: Seeded) {
    let seeded = seeded.await;
    let request = ListTasksRequest::all().with_priorities([Priority::High]);

    assert_eq!(listed(&seeded, request).await, [1, 3, 5]);
}

#[rstest]
#[case("priority,effort", "asc", vec![2, 4, 3, 5, 1])]
#[case("priority,effort", "desc", vec![1, 5, 3, 4, 2])]
#[case("name", "asc", vec![5, 1, 2, 4, 3])]
#[case("taskListId,priority", "desc", vec![5, 4, 3, 1, 2])]
#[case("", "desc", vec![5, 4, 3, 2, 1])]
#[tokio::test(flavor = "multi_thread")]
async fn sorting_follows_keys_then_identity(
    #[future] seeded: Seeded,
    #[case] sort_by: &str,
    #[case] direction: &str,
    #[case] expected: Vec<i64>,
) {
    let seeded = seeded.await;
    let request = ListTasksRequest::all()
        .sorted_by(sort_by)
        .with_direction(direction);

    assert_eq!(listed(&seeded, request).await, expected);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn state_sort_reflects_updates(#[future] seeded: Seeded) {
    let seeded = seeded.await;
    for id in [1, 4] {
        seeded
            .board
            .tasks
            .update_status(super::helpers::task_id(id), TaskState::Done)
            .await
            .expect("state update should succeed");
    }

    let request = ListTasksRequest::all().sorted_by("state");

    assert_eq!(listed(&seeded, request).await, [2, 3, 5, 1, 4]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_sort_field_is_invalid_argument(#[future] seeded: Seeded) {
    let seeded = seeded.await;
    let request = ListTasksRequest::all().sorted_by("dueDate");

    let result = seeded.board.tasks.list_tasks(&request).await;

    let Err(err) = result else {
        panic!("expected the unknown sort field to be rejected");
    };
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

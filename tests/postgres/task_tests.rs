//! `PostgreSQL` integration tests for task storage and updates.

use super::helpers::{PostgresStores, stores};
use rstest::rstest;
use taskboard::task::{
    domain::{Effort, Priority, TaskId, TaskState},
    ports::{TaskRepository, TaskRepositoryError},
};

#[rstest]
fn stored_task_round_trips_every_column(stores: PostgresStores) {
    let work = stores.list("Work").expect("Work should be stored");
    let created = stores
        .task(work, "Write report", Priority::Medium, Effort::High)
        .expect("task should be stored");

    let fetched = stores
        .block_on(stores.tasks.find_by_id(created.id()))
        .expect("lookup should succeed")
        .expect("task should exist");

    assert_eq!(fetched, created);
    assert_eq!(fetched.task_list_id(), work);
    assert_eq!(fetched.name().as_str(), "Write report");
    assert_eq!(fetched.state(), TaskState::Pending);
    assert_eq!(fetched.priority(), Priority::Medium);
    assert_eq!(fetched.effort(), Effort::High);
}

#[rstest]
fn update_persists_state_and_owning_list(stores: PostgresStores) {
    let work = stores.list("Work").expect("Work should be stored");
    let personal = stores.list("Personal").expect("Personal should be stored");
    let mut task = stores
        .task(work, "Renew passport", Priority::High, Effort::Low)
        .expect("task should be stored");

    task.set_state(TaskState::Done);
    task.move_to(personal);
    stores
        .block_on(stores.tasks.update(&task))
        .expect("update should succeed");

    let fetched = stores
        .block_on(stores.tasks.find_by_id(task.id()))
        .expect("lookup should succeed")
        .expect("task should exist");
    assert_eq!(fetched.state(), TaskState::Done);
    assert_eq!(fetched.task_list_id(), personal);
    assert_eq!(fetched.name().as_str(), "Renew passport");
}

#[rstest]
fn update_of_missing_task_is_not_found(stores: PostgresStores) {
    let work = stores.list("Work").expect("Work should be stored");
    let task = stores
        .task(work, "Short-lived", Priority::Low, Effort::Low)
        .expect("task should be stored");
    stores
        .block_on(stores.tasks.delete(task.id()))
        .expect("delete should succeed");

    let result = stores.block_on(stores.tasks.update(&task));

    assert!(matches!(result, Err(TaskRepositoryError::NotFound(id)) if id == task.id()));
}

#[rstest]
fn delete_and_count_track_live_tasks(stores: PostgresStores) {
    let work = stores.list("Work").expect("Work should be stored");
    let first = stores
        .task(work, "one", Priority::Low, Effort::Low)
        .expect("task should be stored");
    stores
        .task(work, "two", Priority::Low, Effort::Low)
        .expect("task should be stored");
    assert_eq!(stores.block_on(stores.tasks.count()).expect("count"), 2);

    stores
        .block_on(stores.tasks.delete(first.id()))
        .expect("delete should succeed");

    assert_eq!(stores.block_on(stores.tasks.count()).expect("count"), 1);
    assert!(!stores
        .block_on(stores.tasks.exists(first.id()))
        .expect("exists should succeed"));
    let again = stores.block_on(stores.tasks.delete(first.id()));
    assert!(matches!(again, Err(TaskRepositoryError::NotFound(id)) if id == first.id()));
}

#[rstest]
fn missing_task_lookup_returns_none(stores: PostgresStores) {
    let result = stores
        .block_on(stores.tasks.find_by_id(TaskId::new(77)))
        .expect("lookup should succeed");

    assert!(result.is_none());
}

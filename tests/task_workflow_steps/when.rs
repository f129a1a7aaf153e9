//! When steps for task workflow BDD scenarios.

use super::world::{BoardWorld, run_async};
use rstest_bdd_macros::when;
use taskboard::task::{
    domain::{Effort, Priority, Task, TaskState, parse_csv},
    services::{CreateTaskRequest, ListTasksRequest, TaskServiceResult},
};
use taskboard::task_list::domain::TaskListId;

/// Identifier no scenario list ever receives.
const MISSING_LIST: i64 = 999;

fn record(world: &mut BoardWorld, name: String, result: TaskServiceResult<Task>) {
    match result {
        Ok(task) => {
            world.tasks_by_name.insert(name, task);
        }
        Err(err) => world.last_error = Some(err),
    }
}

#[when(r#"task "{name}" is marked "{state}""#)]
fn mark_task(world: &mut BoardWorld, name: String, state: String) -> Result<(), eyre::Report> {
    let task_id = world.task(&name)?.id();
    let target = state.parse::<TaskState>()?;
    let result = run_async(world.tasks.update_status(task_id, target));
    record(world, name, result);
    Ok(())
}

#[when(r#"task "{name}" is moved to "{list}""#)]
fn move_task(world: &mut BoardWorld, name: String, list: String) -> Result<(), eyre::Report> {
    let task_id = world.task(&name)?.id();
    let target = world.list_id(&list)?;
    let result = run_async(world.tasks.move_task(task_id, target));
    record(world, name, result);
    Ok(())
}

#[when(r#"task "{name}" is moved to a missing list"#)]
fn move_task_to_missing_list(world: &mut BoardWorld, name: String) -> Result<(), eyre::Report> {
    let task_id = world.task(&name)?.id();
    let result = run_async(
        world
            .tasks
            .move_task(task_id, TaskListId::new(MISSING_LIST)),
    );
    record(world, name, result);
    Ok(())
}

#[when(r#"a task "{name}" with priority "{priority}" and effort "{effort}" is added to "{list}""#)]
fn add_task(
    world: &mut BoardWorld,
    name: String,
    priority: String,
    effort: String,
    list: String,
) -> Result<(), eyre::Report> {
    let list_id = world.list_id(&list)?;
    let request = CreateTaskRequest::new(
        name.clone(),
        priority.parse::<Priority>()?,
        effort.parse::<Effort>()?,
    );
    let result = run_async(world.tasks.create_task(list_id, request));
    record(world, name, result);
    Ok(())
}

#[when(r#"tasks in "{list}" with priorities "{priorities}" are listed by "{sort_by}" "{direction}""#)]
fn list_tasks(
    world: &mut BoardWorld,
    list: String,
    priorities: String,
    sort_by: String,
    direction: String,
) -> Result<(), eyre::Report> {
    let request = ListTasksRequest::in_task_list(world.list_id(&list)?)
        .with_priorities(parse_csv::<Priority>(Some(&priorities))?)
        .sorted_by(sort_by)
        .with_direction(direction);
    world.listed = run_async(world.tasks.list_tasks(&request))?;
    Ok(())
}

#[when(r#"task "{name}" is deleted"#)]
fn delete_task(world: &mut BoardWorld, name: String) -> Result<(), eyre::Report> {
    let task_id = world.task(&name)?.id();
    run_async(world.tasks.delete_task(task_id))?;
    Ok(())
}

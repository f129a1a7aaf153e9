//! Given steps for task workflow BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::{
    domain::{Effort, Priority},
    services::CreateTaskRequest,
};
use taskboard::task_list::services::CreateTaskListRequest;

#[given("a task limit of {limit:u64}")]
fn task_limit(world: &mut BoardWorld, limit: u64) {
    *world = BoardWorld::with_max_tasks(limit);
}

#[given(r#"a task list named "{name}""#)]
fn task_list_named(world: &mut BoardWorld, name: String) -> Result<(), eyre::Report> {
    let created = run_async(
        world
            .task_lists
            .create(CreateTaskListRequest::new(name.clone())),
    )
    .wrap_err("create task list for scenario")?;
    world.lists_by_name.insert(name, created.id());
    Ok(())
}

#[given(r#"a task "{name}" with priority "{priority}" and effort "{effort}" in "{list}""#)]
fn task_in_list(
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
    let created = run_async(world.tasks.create_task(list_id, request))
        .wrap_err("create task for scenario")?;
    world.tasks_by_name.insert(name, created);
    Ok(())
}

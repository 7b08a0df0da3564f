//! Given steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskdesk::task::domain::TaskPayload;

#[given("an empty task list")]
fn empty_task_list(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let tasks = run_async(world.service.read_all(None)).wrap_err("list tasks")?;
    eyre::ensure!(tasks.is_empty(), "expected no tasks, found {}", tasks.len());
    Ok(())
}

#[given(r#"a task titled "{title}" described as "{description}""#)]
fn existing_task(
    world: &mut TaskLifecycleWorld,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    let created = run_async(world.service.create(TaskPayload::new(title, description)))
        .wrap_err("create task for scenario setup")?;
    world.current_task = Some(created);
    Ok(())
}

#[given(r#"a completed task titled "{title}""#)]
fn completed_task(world: &mut TaskLifecycleWorld, title: String) -> Result<(), eyre::Report> {
    let created = run_async(world.service.create(TaskPayload::new(title, "")))
        .wrap_err("create task for scenario setup")?;
    let raw_id = created.id().to_string();
    let completed = run_async(world.service.mark_complete(&raw_id))
        .wrap_err("complete task for scenario setup")?;
    world.current_task = Some(completed);
    Ok(())
}

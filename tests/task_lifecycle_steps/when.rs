//! When steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskdesk::task::domain::TaskPayload;

#[when(r#"a task titled "{title}" described as "{description}" is created"#)]
fn create_task(
    world: &mut TaskLifecycleWorld,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    let created = run_async(world.service.create(TaskPayload::new(title, description)))
        .wrap_err("create task")?;
    world.current_task = Some(created);
    Ok(())
}

#[when("the task is marked complete")]
fn mark_complete(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let raw_id = world.current_raw_id()?;
    let completed = run_async(world.service.mark_complete(&raw_id)).wrap_err("mark complete")?;
    world.current_task = Some(completed);
    Ok(())
}

#[when("the task is marked incomplete")]
fn mark_incomplete(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let raw_id = world.current_raw_id()?;
    let reopened =
        run_async(world.service.mark_incomplete(&raw_id)).wrap_err("mark incomplete")?;
    world.current_task = Some(reopened);
    Ok(())
}

#[when("the task is deleted")]
fn delete_task(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let raw_id = world.current_raw_id()?;
    let message = run_async(world.service.delete(&raw_id)).wrap_err("delete task")?;
    world.deletion_message = Some(message);
    Ok(())
}

#[when(r#"task "{raw_id}" is read"#)]
fn read_task(world: &mut TaskLifecycleWorld, raw_id: String) {
    world.last_read = Some(run_async(world.service.read_one(&raw_id)));
}

//! Then steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use rstest_bdd_macros::then;
use taskdesk::task::{
    adapters::slack::{DEFAULT_MESSAGE_TEMPLATE, render_completion_message},
    services::TaskServiceError,
};

#[then("the task is complete")]
fn task_is_complete(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let task = world
        .current_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing current task"))?;
    eyre::ensure!(task.is_complete(), "expected task {} to be complete", task.id());
    Ok(())
}

#[then("the task is not complete")]
fn task_is_not_complete(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let task = world
        .current_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing current task"))?;
    eyre::ensure!(!task.is_complete(), "expected task {} to be open", task.id());
    Ok(())
}

#[then(r#"the announcement reads "{expected}""#)]
fn announcement_reads(world: &TaskLifecycleWorld, expected: String) -> Result<(), eyre::Report> {
    let notified = world.notifier.notified();
    let [task] = notified.as_slice() else {
        return Err(eyre::eyre!(
            "expected exactly one announcement, found {}",
            notified.len()
        ));
    };
    let message = render_completion_message(task, DEFAULT_MESSAGE_TEMPLATE)?;
    eyre::ensure!(message == expected, "unexpected announcement: {message}");
    Ok(())
}

#[then("{count:u64} announcement was made")]
fn announcement_count(world: &TaskLifecycleWorld, count: u64) -> Result<(), eyre::Report> {
    let attempts = u64::try_from(world.notifier.attempts())?;
    eyre::ensure!(
        attempts == count,
        "expected {count} announcements, found {attempts}"
    );
    Ok(())
}

#[then(r#"the deletion confirmation names "{title}""#)]
fn deletion_confirmation(world: &TaskLifecycleWorld, title: String) -> Result<(), eyre::Report> {
    let message = world
        .deletion_message
        .as_deref()
        .ok_or_else(|| eyre::eyre!("missing deletion confirmation"))?;
    eyre::ensure!(
        message.contains(&format!("\"{title}\"")) && message.ends_with("successfully deleted"),
        "unexpected confirmation: {message}"
    );
    Ok(())
}

#[then("the task can no longer be read")]
fn task_is_gone(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let raw_id = world.current_raw_id()?;
    let result = run_async(world.service.read_one(&raw_id));
    if !matches!(result, Err(TaskServiceError::NotFound(_))) {
        return Err(eyre::eyre!("expected NotFound, got {result:?}"));
    }
    Ok(())
}

#[then("the request fails with invalid input")]
fn fails_with_invalid_input(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_read
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing read result"))?;
    if !matches!(result, Err(TaskServiceError::InvalidInput(_))) {
        return Err(eyre::eyre!("expected InvalidInput, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the request fails with "{message}""#)]
fn fails_with_message(world: &TaskLifecycleWorld, message: String) -> Result<(), eyre::Report> {
    let result = world
        .last_read
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing read result"))?;
    match result {
        Err(error @ TaskServiceError::NotFound(_)) if error.to_string() == message => Ok(()),
        other => Err(eyre::eyre!("expected NotFound({message}), got {other:?}")),
    }
}

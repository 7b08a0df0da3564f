//! Completion message rendering.

use crate::task::{
    domain::Task,
    ports::{NotifierError, NotifierResult},
};
use minijinja::{Environment, context};

/// `strftime` pattern for the completion date, e.g. `Sat 17 Oct 2026, 03:45PM`.
pub const COMPLETION_DATE_FORMAT: &str = "%a %d %b %Y, %I:%M%p";

/// Default message template.
///
/// Templates see `title`, `description`, `task_id` and `completed_on`.
pub const DEFAULT_MESSAGE_TEMPLATE: &str =
    "Someone just completed the task {{ title }} on {{ completed_on }}";

/// Renders the announcement text for a completed task.
///
/// # Errors
///
/// Returns [`NotifierError::NotCompleted`] when the task has no completion
/// timestamp, or [`NotifierError::Template`] when rendering fails.
pub fn render_completion_message(task: &Task, template: &str) -> NotifierResult<String> {
    let completed_at = task
        .completed_at()
        .ok_or(NotifierError::NotCompleted(task.id()))?;
    let completed_on = completed_at.format(COMPLETION_DATE_FORMAT).to_string();

    Environment::new()
        .render_str(
            template,
            context! {
                task_id => task.id().value(),
                title => task.title(),
                description => task.description(),
                completed_on => completed_on,
            },
        )
        .map_err(|error| NotifierError::Template(error.to_string()))
}

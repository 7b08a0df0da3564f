//! Notifier used when no outbound credential is configured.

use async_trait::async_trait;

use crate::task::{
    domain::Task,
    ports::{NotifierResult, TaskNotifier},
};

/// Notifier that only logs completions.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledNotifier;

#[async_trait]
impl TaskNotifier for DisabledNotifier {
    async fn notify_completed(&self, task: &Task) -> NotifierResult<()> {
        tracing::debug!(task_id = %task.id(), "completion notifications disabled");
        Ok(())
    }
}

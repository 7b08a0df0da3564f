//! Outbound notification port fired when a task is completed.

use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for notifier operations.
pub type NotifierResult<T> = Result<T, NotifierError>;

/// Best-effort sink for completion announcements.
///
/// Callers treat failures as non-fatal: a notification is attempted at most
/// once and its outcome never affects the stored task.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskNotifier: Send + Sync {
    /// Announces that `task` has been completed.
    async fn notify_completed(&self, task: &Task) -> NotifierResult<()>;
}

/// Errors returned by notifier adapters.
#[derive(Debug, Clone, Error)]
pub enum NotifierError {
    /// The task carries no completion timestamp.
    #[error("task {0} has not been completed")]
    NotCompleted(TaskId),

    /// The message template failed to render.
    #[error("failed to render notification message: {0}")]
    Template(String),

    /// The outbound request could not be delivered.
    #[error("notification transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl NotifierError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}

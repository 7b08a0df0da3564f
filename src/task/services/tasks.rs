//! Service layer for task creation, lookup, revision, completion and removal.

use crate::task::{
    domain::{ReferenceTimezone, Task, TaskDetails, TaskDomainError, TaskId, TaskOrder, TaskPayload},
    ports::{TaskNotifier, TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// The identifier or payload failed validation.
    #[error(transparent)]
    InvalidInput(#[from] TaskDomainError),
    /// No task exists with the given identifier.
    #[error("Task {0} not found")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(error: TaskRepositoryError) -> Self {
        match error {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other @ TaskRepositoryError::Persistence(_) => Self::Repository(other),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Every operation taking a raw identifier converts it first
/// ([`TaskServiceError::InvalidInput`] on failure) and only then checks
/// existence ([`TaskServiceError::NotFound`]). No locking happens here;
/// concurrent writers to the same task resolve as last-writer-wins in the
/// repository.
pub struct TaskService<R, N, C>
where
    R: TaskRepository + ?Sized,
    N: TaskNotifier + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    repository: Arc<R>,
    notifier: Arc<N>,
    clock: Arc<C>,
    timezone: ReferenceTimezone,
}

impl<R, N, C> Clone for TaskService<R, N, C>
where
    R: TaskRepository + ?Sized,
    N: TaskNotifier + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            notifier: Arc::clone(&self.notifier),
            clock: Arc::clone(&self.clock),
            timezone: self.timezone,
        }
    }
}

impl<R, N, C> TaskService<R, N, C>
where
    R: TaskRepository + ?Sized,
    N: TaskNotifier + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(
        repository: Arc<R>,
        notifier: Arc<N>,
        clock: Arc<C>,
        timezone: ReferenceTimezone,
    ) -> Self {
        Self {
            repository,
            notifier,
            clock,
            timezone,
        }
    }

    /// Returns the timezone completion times are expressed in.
    #[must_use]
    pub const fn timezone(&self) -> ReferenceTimezone {
        self.timezone
    }

    /// Creates an incomplete task from a payload carrying both fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidInput`] when `title` or
    /// `description` is missing, or [`TaskServiceError::Repository`] when the
    /// store rejects the write.
    pub async fn create(&self, payload: TaskPayload) -> TaskServiceResult<Task> {
        let details = TaskDetails::try_from(payload)?;
        let task = self.repository.create(&details).await?;
        tracing::info!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Retrieves a single task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidInput`] for a malformed identifier,
    /// [`TaskServiceError::NotFound`] when no task matches, or
    /// [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn read_one(&self, raw_id: &str) -> TaskServiceResult<Task> {
        let id = TaskId::parse(raw_id)?;
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }

    /// Lists tasks, ordered by title when `sort` is `asc` or `desc`.
    ///
    /// Unrecognised sort values behave like an absent one.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the listing fails.
    pub async fn read_all(&self, sort: Option<&str>) -> TaskServiceResult<Vec<Task>> {
        let order = TaskOrder::from_sort_param(sort);
        Ok(self.repository.list(order).await?)
    }

    /// Overwrites the title and description of an existing task.
    ///
    /// Both fields are required even though nothing else changes.
    ///
    /// # Errors
    ///
    /// Returns the [`TaskService::read_one`] errors, then
    /// [`TaskServiceError::InvalidInput`] when a field is missing.
    pub async fn update(&self, raw_id: &str, payload: TaskPayload) -> TaskServiceResult<Task> {
        let mut task = self.read_one(raw_id).await?;
        let details = TaskDetails::try_from(payload)?;
        task.revise(details);
        self.repository.update(&task).await?;
        tracing::info!(task_id = %task.id(), "task updated");
        Ok(task)
    }

    /// Marks a task complete and announces it.
    ///
    /// The completion is committed before the notifier is called; a failed
    /// notification is logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns the [`TaskService::read_one`] errors, or
    /// [`TaskServiceError::Repository`] when the write fails.
    pub async fn mark_complete(&self, raw_id: &str) -> TaskServiceResult<Task> {
        let mut task = self.read_one(raw_id).await?;
        task.mark_complete(self.timezone, &*self.clock);
        self.repository.update(&task).await?;
        tracing::info!(task_id = %task.id(), "task marked complete");

        if let Err(error) = self.notifier.notify_completed(&task).await {
            tracing::warn!(task_id = %task.id(), %error, "completion notification failed");
        }
        Ok(task)
    }

    /// Clears a task's completion timestamp.
    ///
    /// # Errors
    ///
    /// Returns the [`TaskService::read_one`] errors, or
    /// [`TaskServiceError::Repository`] when the write fails.
    pub async fn mark_incomplete(&self, raw_id: &str) -> TaskServiceResult<Task> {
        let mut task = self.read_one(raw_id).await?;
        task.mark_incomplete();
        self.repository.update(&task).await?;
        tracing::info!(task_id = %task.id(), "task marked incomplete");
        Ok(task)
    }

    /// Deletes a task and returns a confirmation naming it.
    ///
    /// # Errors
    ///
    /// Returns the [`TaskService::read_one`] errors, or
    /// [`TaskServiceError::Repository`] when the delete fails.
    pub async fn delete(&self, raw_id: &str) -> TaskServiceResult<String> {
        let task = self.read_one(raw_id).await?;
        self.repository.delete(task.id()).await?;
        tracing::info!(task_id = %task.id(), "task deleted");
        Ok(format!(
            "Task {} \"{}\" successfully deleted",
            task.id(),
            task.title()
        ))
    }
}

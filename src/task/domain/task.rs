//! Task aggregate root.

use super::{ReferenceTimezone, TaskDetails, TaskId};
use chrono::DateTime;
use chrono_tz::Tz;
use mockable::Clock;

/// Task aggregate root.
///
/// `completed_at` is either absent (the task is open) or an aware timestamp
/// in the reference timezone marking when the task was completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    completed_at: Option<DateTime<Tz>>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted completion timestamp, if any.
    pub completed_at: Option<DateTime<Tz>>,
}

impl Task {
    /// Builds a freshly stored, incomplete task from its assigned identifier.
    #[must_use]
    pub fn new(id: TaskId, details: TaskDetails) -> Self {
        let (title, description) = details.into_parts();
        Self {
            id,
            title,
            description,
            completed_at: None,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            completed_at: data.completed_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the completion timestamp, if the task is complete.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Tz>> {
        self.completed_at
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Overwrites the title and description.
    pub fn revise(&mut self, details: TaskDetails) {
        let (title, description) = details.into_parts();
        self.title = title;
        self.description = description;
    }

    /// Stamps the task complete at the clock's current instant.
    ///
    /// Completing an already completed task moves the timestamp forward.
    pub fn mark_complete(&mut self, timezone: ReferenceTimezone, clock: &(impl Clock + ?Sized)) {
        self.completed_at = Some(timezone.now(clock));
    }

    /// Clears the completion timestamp.
    pub fn mark_incomplete(&mut self) {
        self.completed_at = None;
    }
}

//! JSON request and response shapes.

use serde::{Deserialize, Serialize};

use crate::task::domain::Task;

/// Wire representation of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    /// Task identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Whether a completion timestamp is set.
    pub is_complete: bool,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().value(),
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            is_complete: task.is_complete(),
        }
    }
}

/// Single-task body wrapped under a `task` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEnvelope {
    /// The task.
    pub task: TaskResponse,
}

impl From<&Task> for TaskEnvelope {
    fn from(task: &Task) -> Self {
        Self {
            task: TaskResponse::from(task),
        }
    }
}

/// Body carrying a `details` message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailsBody {
    /// Human-readable details.
    pub details: String,
}

/// Body carrying a `message` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    /// Human-readable message.
    pub message: String,
}

/// Query string accepted by the listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTasksQuery {
    /// `asc` or `desc`; anything else leaves the order unspecified.
    pub sort: Option<String>,
}

impl ListTasksQuery {
    /// Builds the query from decoded key/value pairs.
    ///
    /// When `sort` repeats, the first occurrence wins.
    #[must_use]
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let sort = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "sort").then_some(value));
        Self { sort }
    }
}

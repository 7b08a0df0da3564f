//! Domain model for task tracking.
//!
//! A task is a title/description pair with an optional completion timestamp.
//! The domain owns identifier parsing, payload validation, list ordering and
//! the reference timezone used to stamp completions, while keeping storage
//! and transport concerns outside of this boundary.

mod details;
mod error;
mod ids;
mod order;
mod task;
mod timezone;

pub use details::{TaskDetails, TaskPayload};
pub use error::TaskDomainError;
pub use ids::TaskId;
pub use order::TaskOrder;
pub use task::{PersistedTaskData, Task};
pub use timezone::ReferenceTimezone;

//! Port contracts for task tracking.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod notifier;
pub mod repository;

pub use notifier::{NotifierError, NotifierResult, TaskNotifier};
#[cfg(test)]
pub use notifier::MockTaskNotifier;
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};

//! Application services for task tracking.

mod tasks;

pub use tasks::{TaskService, TaskServiceError, TaskServiceResult};

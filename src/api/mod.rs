//! HTTP surface for the task resource.
//!
//! Routes live under `/tasks`. Handlers decode the request, delegate to the
//! [`TaskService`](crate::task::services::TaskService) and translate the
//! outcome into a JSON response.

pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, patch, post};
use mockable::Clock;
use tower_http::trace::TraceLayer;

use crate::task::{
    ports::{TaskNotifier, TaskRepository},
    services::TaskService,
};

pub use error::ApiErrorResponse;

/// Task service wired with trait objects, as used by the HTTP layer.
pub type SharedTaskService =
    TaskService<dyn TaskRepository, dyn TaskNotifier, dyn Clock + Send + Sync>;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Task orchestration service.
    pub tasks: Arc<SharedTaskService>,
}

impl AppState {
    /// Wraps a service for use as router state.
    #[must_use]
    pub fn new(tasks: SharedTaskService) -> Self {
        Self {
            tasks: Arc::new(tasks),
        }
    }
}

/// Builds the `/tasks` router with request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/tasks", post(handlers::create_task).get(handlers::list_tasks))
        .route(
            "/tasks/{task_id}",
            get(handlers::read_task)
                .put(handlers::update_task)
                .delete(handlers::delete_task),
        )
        .route(
            "/tasks/{task_id}/mark_complete",
            patch(handlers::mark_complete),
        )
        .route(
            "/tasks/{task_id}/mark_incomplete",
            patch(handlers::mark_incomplete),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

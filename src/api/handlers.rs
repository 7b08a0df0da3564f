//! Request handlers for the `/tasks` routes.

use axum::{
    Json,
    body::Bytes,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
};

use super::{
    AppState,
    dto::{DetailsBody, ListTasksQuery, TaskEnvelope, TaskResponse},
    error::ApiErrorResponse,
};
use crate::task::domain::TaskPayload;

/// Result type shared by handlers.
pub type ApiResult<T> = Result<T, ApiErrorResponse>;

/// Path extractor that keeps decoding failures in the handler's hands.
type TaskIdPath = Result<Path<String>, PathRejection>;

/// Unwraps the raw task identifier; an undecodable path segment is invalid
/// input like any other malformed identifier.
fn raw_task_id(path: TaskIdPath) -> ApiResult<String> {
    path.map(|Path(task_id)| task_id).map_err(|rejection| {
        tracing::debug!(%rejection, "undecodable task identifier");
        ApiErrorResponse::InvalidData
    })
}

/// `POST /tasks`
///
/// # Errors
///
/// Returns 400 when the body is not a JSON object with `title` and
/// `description`.
pub async fn create_task(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<TaskEnvelope>)> {
    let payload = TaskPayload::from_json(&body)?;
    let task = state.tasks.create(payload).await?;
    Ok((StatusCode::CREATED, Json(TaskEnvelope::from(&task))))
}

/// `GET /tasks?sort=asc|desc`
///
/// A query string that cannot be decoded is treated as carrying no `sort`.
///
/// # Errors
///
/// Returns 500 when the store fails.
pub async fn list_tasks(
    State(state): State<AppState>,
    raw_query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Json<Vec<TaskResponse>>> {
    let query = raw_query.map_or_else(
        |rejection| {
            tracing::debug!(%rejection, "ignoring undecodable list query");
            ListTasksQuery::default()
        },
        |Query(pairs)| ListTasksQuery::from_pairs(pairs),
    );
    let tasks = state.tasks.read_all(query.sort.as_deref()).await?;
    Ok(Json(tasks.iter().map(TaskResponse::from).collect()))
}

/// `GET /tasks/{task_id}`
///
/// # Errors
///
/// Returns 400 for a malformed identifier and 404 for an unknown one.
pub async fn read_task(
    State(state): State<AppState>,
    path: TaskIdPath,
) -> ApiResult<Json<TaskEnvelope>> {
    let task_id = raw_task_id(path)?;
    let task = state.tasks.read_one(&task_id).await?;
    Ok(Json(TaskEnvelope::from(&task)))
}

/// `PUT /tasks/{task_id}`
///
/// The identifier is resolved before the body is examined.
///
/// # Errors
///
/// Returns 400 for a malformed identifier or body, and 404 for an unknown
/// identifier.
pub async fn update_task(
    State(state): State<AppState>,
    path: TaskIdPath,
    body: Bytes,
) -> ApiResult<Json<TaskEnvelope>> {
    let task_id = raw_task_id(path)?;
    let payload = match TaskPayload::from_json(&body) {
        Ok(payload) => payload,
        Err(error) => {
            state.tasks.read_one(&task_id).await?;
            return Err(error.into());
        }
    };
    let task = state.tasks.update(&task_id, payload).await?;
    Ok(Json(TaskEnvelope::from(&task)))
}

/// `PATCH /tasks/{task_id}/mark_complete`
///
/// # Errors
///
/// Returns 400 for a malformed identifier and 404 for an unknown one.
pub async fn mark_complete(
    State(state): State<AppState>,
    path: TaskIdPath,
) -> ApiResult<Json<TaskEnvelope>> {
    let task_id = raw_task_id(path)?;
    let task = state.tasks.mark_complete(&task_id).await?;
    Ok(Json(TaskEnvelope::from(&task)))
}

/// `PATCH /tasks/{task_id}/mark_incomplete`
///
/// # Errors
///
/// Returns 400 for a malformed identifier and 404 for an unknown one.
pub async fn mark_incomplete(
    State(state): State<AppState>,
    path: TaskIdPath,
) -> ApiResult<Json<TaskEnvelope>> {
    let task_id = raw_task_id(path)?;
    let task = state.tasks.mark_incomplete(&task_id).await?;
    Ok(Json(TaskEnvelope::from(&task)))
}

/// `DELETE /tasks/{task_id}`
///
/// # Errors
///
/// Returns 400 for a malformed identifier and 404 for an unknown one.
pub async fn delete_task(
    State(state): State<AppState>,
    path: TaskIdPath,
) -> ApiResult<Json<DetailsBody>> {
    let task_id = raw_task_id(path)?;
    let details = state.tasks.delete(&task_id).await?;
    Ok(Json(DetailsBody { details }))
}

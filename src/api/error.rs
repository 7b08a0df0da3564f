//! Translation of service errors into HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::dto::{DetailsBody, MessageBody};
use crate::task::{domain::TaskDomainError, services::TaskServiceError};

/// Body text for every 400 response.
pub const INVALID_DATA: &str = "Invalid data";

/// Error response with its status code and JSON body.
#[derive(Debug)]
pub enum ApiErrorResponse {
    /// 400 with `{"details": "Invalid data"}`.
    InvalidData,
    /// 404 with `{"message": "Task {id} not found"}`.
    NotFound(String),
    /// 500 with a generic `details` body.
    Internal,
}

impl ApiErrorResponse {
    /// Returns the HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidData => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::InvalidData => (
                status,
                Json(DetailsBody {
                    details: INVALID_DATA.to_owned(),
                }),
            )
                .into_response(),
            Self::NotFound(message) => (status, Json(MessageBody { message })).into_response(),
            Self::Internal => (
                status,
                Json(DetailsBody {
                    details: "Internal server error".to_owned(),
                }),
            )
                .into_response(),
        }
    }
}

impl From<TaskDomainError> for ApiErrorResponse {
    fn from(error: TaskDomainError) -> Self {
        tracing::debug!(%error, "rejected task request");
        Self::InvalidData
    }
}

impl From<TaskServiceError> for ApiErrorResponse {
    fn from(error: TaskServiceError) -> Self {
        match error {
            TaskServiceError::InvalidInput(domain) => Self::from(domain),
            TaskServiceError::NotFound(id) => Self::NotFound(format!("Task {id} not found")),
            TaskServiceError::Repository(source) => {
                tracing::error!(error = %source, "task store failure");
                Self::Internal
            }
        }
    }
}

//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The raw identifier is not a valid integer task identifier.
    #[error("invalid task identifier '{0}', expected an integer")]
    InvalidTaskId(String),

    /// A required payload field was absent or null.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// The request body could not be decoded into a task payload.
    #[error("malformed task payload: {0}")]
    MalformedPayload(String),

    /// The timezone name is not in the IANA database.
    #[error("unknown timezone '{0}'")]
    UnknownTimezone(String),
}

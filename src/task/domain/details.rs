//! Request payloads and their validated form.

use super::TaskDomainError;
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::Value;

/// Untyped title/description pair as received from a client.
///
/// Either field may be absent; [`TaskDetails::try_from`] decides whether the
/// payload is usable. Numbers and booleans are kept as their JSON text, so
/// `{"title": 5}` carries the title `"5"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPayload {
    /// Requested task title.
    #[serde(default, deserialize_with = "scalar_text")]
    pub title: Option<String>,
    /// Requested task description.
    #[serde(default, deserialize_with = "scalar_text")]
    pub description: Option<String>,
}

/// Reads a JSON scalar as text; `null` counts as absent.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(Value::Bool(flag)) => Ok(Some(flag.to_string())),
        Some(other @ (Value::Array(_) | Value::Object(_))) => Err(D::Error::custom(format!(
            "expected a string, number or boolean, found {other}"
        ))),
    }
}

impl TaskPayload {
    /// Creates a payload carrying both fields.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
        }
    }

    /// Decodes a payload from a JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::MalformedPayload`] when the body is not a
    /// JSON object or a field holds an array or object.
    pub fn from_json(body: &[u8]) -> Result<Self, TaskDomainError> {
        serde_json::from_slice(body).map_err(|err| TaskDomainError::MalformedPayload(err.to_string()))
    }
}

/// Validated title and description for creating or revising a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetails {
    title: String,
    description: String,
}

impl TaskDetails {
    /// Creates details from already validated values.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
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

    /// Splits the details into owned title and description.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.title, self.description)
    }
}

impl TryFrom<TaskPayload> for TaskDetails {
    type Error = TaskDomainError;

    fn try_from(payload: TaskPayload) -> Result<Self, Self::Error> {
        let title = payload
            .title
            .ok_or(TaskDomainError::MissingField("title"))?;
        let description = payload
            .description
            .ok_or(TaskDomainError::MissingField("description"))?;
        Ok(Self { title, description })
    }
}

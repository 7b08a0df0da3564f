//! HTTP client posting completion messages to Slack.

use async_trait::async_trait;
use serde::Serialize;

use super::message::{DEFAULT_MESSAGE_TEMPLATE, render_completion_message};
use crate::task::{
    domain::Task,
    ports::{NotifierError, NotifierResult, TaskNotifier},
};

/// Default `chat.postMessage` endpoint.
pub const DEFAULT_SLACK_ENDPOINT: &str = "https://slack.com/api/chat.postMessage";

/// Default channel receiving completion announcements.
pub const DEFAULT_SLACK_CHANNEL: &str = "task-notifications";

/// Connection settings for [`SlackNotifier`].
#[derive(Clone, PartialEq, Eq)]
pub struct SlackNotifierSettings {
    /// Bearer token sent in the `Authorization` header.
    pub api_token: String,
    /// Endpoint receiving the POST.
    pub endpoint: String,
    /// Channel identifier included in the payload.
    pub channel: String,
    /// `minijinja` template for the message text.
    pub message_template: String,
}

impl SlackNotifierSettings {
    /// Creates settings with the default endpoint, channel and template.
    #[must_use]
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            endpoint: DEFAULT_SLACK_ENDPOINT.to_owned(),
            channel: DEFAULT_SLACK_CHANNEL.to_owned(),
            message_template: DEFAULT_MESSAGE_TEMPLATE.to_owned(),
        }
    }
}

impl std::fmt::Debug for SlackNotifierSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackNotifierSettings")
            .field("api_token", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("channel", &self.channel)
            .field("message_template", &self.message_template)
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct PostMessage<'a> {
    channel: &'a str,
    text: &'a str,
}

/// Notifier posting an authenticated JSON message per completed task.
///
/// The response is not inspected and nothing is retried.
#[derive(Debug, Clone)]
pub struct SlackNotifier {
    client: reqwest::Client,
    settings: SlackNotifierSettings,
}

impl SlackNotifier {
    /// Creates a notifier with a fresh HTTP client.
    #[must_use]
    pub fn new(settings: SlackNotifierSettings) -> Self {
        Self::with_client(reqwest::Client::new(), settings)
    }

    /// Creates a notifier sharing an existing HTTP client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client, settings: SlackNotifierSettings) -> Self {
        Self { client, settings }
    }
}

#[async_trait]
impl TaskNotifier for SlackNotifier {
    async fn notify_completed(&self, task: &Task) -> NotifierResult<()> {
        let text = render_completion_message(task, &self.settings.message_template)?;
        let payload = PostMessage {
            channel: &self.settings.channel,
            text: &text,
        };

        let response = self
            .client
            .post(&self.settings.endpoint)
            .bearer_auth(&self.settings.api_token)
            .json(&payload)
            .send()
            .await
            .map_err(NotifierError::transport)?;

        tracing::debug!(
            task_id = %task.id(),
            status = %response.status(),
            "completion notification sent"
        );
        Ok(())
    }
}

//! Slack webhook adapter for completion notifications.

mod message;
mod notifier;

pub use message::{COMPLETION_DATE_FORMAT, DEFAULT_MESSAGE_TEMPLATE, render_completion_message};
pub use notifier::{
    DEFAULT_SLACK_CHANNEL, DEFAULT_SLACK_ENDPOINT, SlackNotifier, SlackNotifierSettings,
};

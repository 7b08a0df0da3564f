//! Recording notifier for tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};

use crate::task::{
    domain::Task,
    ports::{NotifierError, NotifierResult, TaskNotifier},
};

/// Notifier that remembers every task it was asked to announce.
///
/// A failing recorder still records the attempt before returning an error,
/// which lets tests count attempts independently of their outcome.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notified: Arc<Mutex<Vec<Task>>>,
    fail: bool,
}

impl RecordingNotifier {
    /// Creates a recorder whose calls succeed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recorder whose calls always fail with a transport error.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            notified: Arc::default(),
            fail: true,
        }
    }

    /// Returns the tasks passed to the notifier, in call order.
    #[must_use]
    pub fn notified(&self) -> Vec<Task> {
        self.notified
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns how many notification attempts were made.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.notified
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl TaskNotifier for RecordingNotifier {
    async fn notify_completed(&self, task: &Task) -> NotifierResult<()> {
        self.notified
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(task.clone());
        if self.fail {
            return Err(NotifierError::transport(std::io::Error::other(
                "notification endpoint unreachable",
            )));
        }
        Ok(())
    }
}

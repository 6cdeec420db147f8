//! Notification backend port interface

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::notification::{NotificationContent, NotificationId};

use super::delegate::NotificationDelegate;

/// Notification backend errors
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    #[error("Notification service unavailable: {0}")]
    Unavailable(String),

    #[error("notify-send not found")]
    NotifySendNotFound,

    #[error("Failed to show notification: {0}")]
    ShowFailed(String),

    #[error("Failed to close notification {id}: {message}")]
    CloseFailed { id: NotificationId, message: String },

    #[error("The {0} backend cannot dismiss notifications")]
    DismissUnsupported(&'static str),

    #[error("No notification backend available (no session bus, no notify-send)")]
    NoBackendAvailable,
}

/// Port for displaying notifications and forwarding their lifecycle.
///
/// A backend owns the connection to whatever actually renders the
/// notification. It reports `dismissed`/`clicked` through the delegate
/// passed to `show`; `displayed`/`failed` are the caller's concern so a
/// failed show is never double-reported.
#[async_trait]
pub trait NotificationBackend: Send + Sync {
    /// Display a notification.
    ///
    /// # Arguments
    /// * `content` - What to display
    /// * `delegate` - Receives close/click events for this notification
    ///
    /// # Returns
    /// The server-assigned notification id
    async fn show(
        &self,
        content: &NotificationContent,
        delegate: Arc<dyn NotificationDelegate>,
    ) -> Result<NotificationId, BackendError>;

    /// Ask the server to close a previously shown notification.
    async fn dismiss(&self, id: NotificationId) -> Result<(), BackendError>;
}

/// Blanket implementation for boxed backend types
#[async_trait]
impl NotificationBackend for Box<dyn NotificationBackend> {
    async fn show(
        &self,
        content: &NotificationContent,
        delegate: Arc<dyn NotificationDelegate>,
    ) -> Result<NotificationId, BackendError> {
        self.as_ref().show(content, delegate).await
    }

    async fn dismiss(&self, id: NotificationId) -> Result<(), BackendError> {
        self.as_ref().dismiss(id).await
    }
}

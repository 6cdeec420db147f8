//! Show notification use case

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, warn};

use crate::domain::notification::{NotificationContent, NotificationId};

use super::ports::{BackendError, NotificationBackend, NotificationDelegate};

/// Errors from the show use case
#[derive(Debug, Clone, Error)]
pub enum ShowError {
    #[error("Notification has no title")]
    EmptyTitle,

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Input parameters for the show use case
#[derive(Debug, Clone, Default)]
pub struct ShowInput {
    pub content: NotificationContent,
}

/// Displays a notification and routes its lifecycle to a delegate.
///
/// The backend reports `clicked`/`dismissed` as they happen; this use case
/// owns the `displayed`/`failed` pair so each show produces exactly one of
/// the two.
pub struct ShowNotification<B: NotificationBackend> {
    backend: B,
}

impl<B: NotificationBackend> ShowNotification<B> {
    /// Create a new use case instance
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Show the notification and report the outcome through the delegate.
    pub async fn execute(
        &self,
        input: ShowInput,
        delegate: Arc<dyn NotificationDelegate>,
    ) -> Result<NotificationId, ShowError> {
        if input.content.title.trim().is_empty() {
            let err = ShowError::EmptyTitle;
            delegate.failed(&err.to_string());
            return Err(err);
        }

        match self.backend.show(&input.content, Arc::clone(&delegate)).await {
            Ok(id) => {
                debug!(id = id.0, title = %input.content.title, "notification displayed");
                delegate.displayed(id);
                Ok(id)
            }
            Err(e) => {
                error!("failed to show notification: {e}");
                delegate.failed(&e.to_string());
                Err(e.into())
            }
        }
    }

    /// Ask the server to close a previously shown notification.
    pub async fn dismiss(&self, id: NotificationId) -> Result<(), ShowError> {
        if let Err(e) = self.backend.dismiss(id).await {
            warn!("failed to close notification {id}: {e}");
            return Err(e.into());
        }
        Ok(())
    }
}

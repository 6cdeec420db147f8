//! Notification lifecycle events

use std::fmt;

/// Server-assigned notification id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(pub u32);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle event for a displayed notification.
///
/// Exactly one of `Clicked` or `Dismissed` ends the life of a shown
/// notification; `Failed` means it was never shown at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationEvent {
    Displayed(NotificationId),
    Clicked {
        id: NotificationId,
        action: String,
    },
    Dismissed(NotificationId),
    Failed {
        message: String,
    },
}

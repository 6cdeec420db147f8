//! Notification delegate port interface

use crate::domain::notification::{NotificationEvent, NotificationId};

/// Receiver for notification lifecycle callbacks.
///
/// All methods default to no-ops so implementors only handle the events
/// they care about. Callbacks may arrive from a blocking worker thread,
/// so implementations must be cheap and must not block.
pub trait NotificationDelegate: Send + Sync {
    /// The notification reached the screen
    fn displayed(&self, _id: NotificationId) {}

    /// The user invoked an action (or clicked the notification body)
    fn clicked(&self, _id: NotificationId, _action: &str) {}

    /// The notification was closed without a click (expired or dismissed)
    fn dismissed(&self, _id: NotificationId) {}

    /// The notification could not be shown
    fn failed(&self, _message: &str) {}
}

/// Delegate that forwards every event into a channel.
/// Useful for callers that want to consume the lifecycle as a stream.
pub struct ChannelDelegate {
    sender: tokio::sync::mpsc::UnboundedSender<NotificationEvent>,
}

impl ChannelDelegate {
    /// Create a delegate plus the receiving end of its channel
    pub fn new() -> (
        Self,
        tokio::sync::mpsc::UnboundedReceiver<NotificationEvent>,
    ) {
        let (sender, receiver) = tokio::sync::mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl NotificationDelegate for ChannelDelegate {
    fn displayed(&self, id: NotificationId) {
        let _ = self.sender.send(NotificationEvent::Displayed(id));
    }

    fn clicked(&self, id: NotificationId, action: &str) {
        let _ = self.sender.send(NotificationEvent::Clicked {
            id,
            action: action.to_string(),
        });
    }

    fn dismissed(&self, id: NotificationId) {
        let _ = self.sender.send(NotificationEvent::Dismissed(id));
    }

    fn failed(&self, message: &str) {
        let _ = self.sender.send(NotificationEvent::Failed {
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_delegate_forwards_events() {
        let (delegate, mut receiver) = ChannelDelegate::new();
        let id = NotificationId(7);

        delegate.displayed(id);
        delegate.clicked(id, "default");
        delegate.dismissed(id);

        assert_eq!(
            receiver.try_recv().unwrap(),
            NotificationEvent::Displayed(id)
        );
        assert_eq!(
            receiver.try_recv().unwrap(),
            NotificationEvent::Clicked {
                id,
                action: "default".to_string()
            }
        );
        assert_eq!(
            receiver.try_recv().unwrap(),
            NotificationEvent::Dismissed(id)
        );
    }

    #[test]
    fn channel_delegate_survives_dropped_receiver() {
        let (delegate, receiver) = ChannelDelegate::new();
        drop(receiver);
        // Must not panic when nobody is listening
        delegate.failed("gone");
    }
}

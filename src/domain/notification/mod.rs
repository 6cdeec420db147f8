//! Notification domain types

pub mod content;
pub mod event;
pub mod timeout;
pub mod urgency;

pub use content::{NotificationAction, NotificationContent, DEFAULT_ACTION};
pub use event::{NotificationEvent, NotificationId};
pub use timeout::ExpireTimeout;
pub use urgency::Urgency;

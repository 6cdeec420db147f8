//! Domain layer - Core notification model
//!
//! Contains value objects, lifecycle events, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod notification;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use notification::{
    ExpireTimeout, NotificationAction, NotificationContent, NotificationEvent, NotificationId,
    Urgency,
};

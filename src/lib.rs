//! desktoast - desktop notifications for Linux
//!
//! This crate displays desktop notifications through the freedesktop
//! notification service and forwards their lifecycle (displayed, clicked,
//! dismissed, failed) to a delegate.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Notification content, timeout/urgency value objects,
//!   lifecycle events, and errors
//! - **Application**: The show/dismiss use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (notification server over
//!   D-Bus, notify-send fallback, XDG config store)
//! - **CLI**: Command-line interface, argument parsing, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

//! Application layer - Use cases and port interfaces
//!
//! Contains the core notification operations and trait definitions
//! for external system interactions.

pub mod ports;
pub mod show;

// Re-export use cases
pub use show::{ShowError, ShowInput, ShowNotification};

//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the notification server, notify-send, and the
//! XDG config store.

pub mod backend;
pub mod config;

// Re-export adapters
pub use backend::{
    create_backend, BackendKind, BackendPreference, DesktopBackend, NotifySendBackend,
    ServerInformation, ServerProbe,
};
pub use config::XdgConfigStore;

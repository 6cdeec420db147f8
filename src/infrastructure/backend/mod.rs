//! Notification backend infrastructure module
//!
//! Provides the freedesktop notification server backend (primary) and a
//! notify-send subprocess fallback, plus detection of which one to use.

mod desktop;
mod factory;
mod notify_send;
mod server;

pub use desktop::DesktopBackend;
pub use factory::{create_backend, BackendKind, BackendPreference, ParseBackendError};
pub use notify_send::NotifySendBackend;
pub use server::{ServerInformation, ServerProbe, NO_ACTIONS_ENV};

//! Notification server probe over D-Bus
//!
//! Wraps the `org.freedesktop.Notifications` session service for the
//! calls notify-rust does not expose: the capability query, closing a
//! notification by id, and the server information triple.

use std::env;

use zbus::{proxy, Connection};

use crate::application::ports::BackendError;
use crate::domain::notification::NotificationId;

/// Environment variable that forces action buttons off.
///
/// Notify-OSD renders a notification with actions as a modal dialog
/// instead of a toast, so users on such servers can opt out.
pub const NO_ACTIONS_ENV: &str = "DESKTOAST_NO_ACTIONS";

/// Freedesktop Notifications D-Bus proxy
#[proxy(
    interface = "org.freedesktop.Notifications",
    default_service = "org.freedesktop.Notifications",
    default_path = "/org/freedesktop/Notifications"
)]
trait Notifications {
    /// Close a notification
    fn close_notification(&self, id: u32) -> zbus::Result<()>;

    /// Get server capabilities
    fn get_capabilities(&self) -> zbus::Result<Vec<String>>;

    /// Get server information
    fn get_server_information(&self) -> zbus::Result<(String, String, String, String)>;
}

/// Name, vendor, version and spec version reported by the server
#[derive(Debug, Clone)]
pub struct ServerInformation {
    pub name: String,
    pub vendor: String,
    pub version: String,
    pub spec_version: String,
}

/// Connection to the notification server with the capability list
/// fetched once up front.
pub struct ServerProbe {
    connection: Connection,
    capabilities: Vec<String>,
}

impl ServerProbe {
    /// Connect to the session bus and probe the server's capabilities.
    pub async fn connect() -> Result<Self, BackendError> {
        let connection = Connection::session()
            .await
            .map_err(|e| BackendError::Unavailable(e.to_string()))?;

        let proxy = NotificationsProxy::new(&connection)
            .await
            .map_err(|e| BackendError::Unavailable(e.to_string()))?;
        let capabilities = proxy
            .get_capabilities()
            .await
            .map_err(|e| BackendError::Unavailable(e.to_string()))?;

        Ok(Self {
            connection,
            capabilities,
        })
    }

    /// Whether the server advertised a capability
    pub fn has_capability(&self, capability: &str) -> bool {
        self.capabilities.iter().any(|c| c == capability)
    }

    /// The cached capability list
    pub fn capabilities(&self) -> &[String] {
        &self.capabilities
    }

    /// Whether action buttons should be attached to notifications.
    /// False when the server lacks the capability or the user opted out.
    pub fn supports_actions(&self) -> bool {
        if env::var_os(NO_ACTIONS_ENV).is_some() {
            return false;
        }
        self.has_capability("actions")
    }

    /// Which append hint the server understands, if any.
    pub fn append_hint(&self) -> Option<&'static str> {
        select_append_hint(&self.capabilities)
    }

    /// Ask the server to close a notification by id.
    pub async fn close(&self, id: NotificationId) -> Result<(), BackendError> {
        let proxy = NotificationsProxy::new(&self.connection)
            .await
            .map_err(|e| BackendError::Unavailable(e.to_string()))?;
        proxy.close_notification(id.0).await.map_err(|e| {
            BackendError::CloseFailed {
                id,
                message: e.to_string(),
            }
        })
    }

    /// Fetch the server information triple.
    pub async fn server_information(&self) -> Result<ServerInformation, BackendError> {
        let proxy = NotificationsProxy::new(&self.connection)
            .await
            .map_err(|e| BackendError::Unavailable(e.to_string()))?;
        let (name, vendor, version, spec_version) = proxy
            .get_server_information()
            .await
            .map_err(|e| BackendError::Unavailable(e.to_string()))?;

        Ok(ServerInformation {
            name,
            vendor,
            version,
            spec_version,
        })
    }
}

/// Pick the append hint the server understands, if any.
/// The standard name is preferred over the legacy Canonical one.
fn select_append_hint(capabilities: &[String]) -> Option<&'static str> {
    if capabilities.iter().any(|c| c == "append") {
        Some("append")
    } else if capabilities.iter().any(|c| c == "x-canonical-append") {
        Some("x-canonical-append")
    } else {
        None
    }
}

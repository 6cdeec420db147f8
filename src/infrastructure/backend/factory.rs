//! Backend factory with automatic detection

use std::fmt;
use std::process::Stdio;
use std::str::FromStr;

use tokio::process::Command;
use tracing::debug;

use crate::application::ports::{BackendError, NotificationBackend};

use super::desktop::DesktopBackend;
use super::notify_send::NotifySendBackend;

/// Available notification backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Freedesktop notification server over the session bus
    Desktop,
    /// notify-send subprocess fallback
    NotifySend,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Desktop => write!(f, "desktop"),
            BackendKind::NotifySend => write!(f, "notify-send"),
        }
    }
}

/// User preference for backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendPreference {
    /// Try the notification server first, then notify-send
    #[default]
    Auto,
    /// Require the notification server
    Desktop,
    /// Require the notify-send binary
    NotifySend,
}

impl fmt::Display for BackendPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendPreference::Auto => write!(f, "auto"),
            BackendPreference::Desktop => write!(f, "desktop"),
            BackendPreference::NotifySend => write!(f, "notify-send"),
        }
    }
}

/// Error type for parsing backend preference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBackendError {
    pub value: String,
    pub valid_options: &'static str,
}

impl fmt::Display for ParseBackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid backend '{}'. Valid options: {}",
            self.value, self.valid_options
        )
    }
}

impl std::error::Error for ParseBackendError {}

impl FromStr for BackendPreference {
    type Err = ParseBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(BackendPreference::Auto),
            "desktop" | "dbus" => Ok(BackendPreference::Desktop),
            "notify-send" | "notify_send" => Ok(BackendPreference::NotifySend),
            _ => Err(ParseBackendError {
                value: s.to_string(),
                valid_options: "auto, desktop, notify-send",
            }),
        }
    }
}

/// Check if a tool binary is available using `which`
async fn is_tool_available(tool: &str) -> bool {
    Command::new("which")
        .arg(tool)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Create a notification backend using the specified preference.
///
/// Returns the backend and the detected kind, or an error if nothing
/// is available. Auto tries the notification server first and falls back
/// to the notify-send binary.
pub async fn create_backend(
    preference: BackendPreference,
    app_name: &str,
) -> Result<(Box<dyn NotificationBackend>, BackendKind), BackendError> {
    match preference {
        BackendPreference::Auto => match DesktopBackend::connect(app_name).await {
            Ok(backend) => Ok((
                Box::new(backend) as Box<dyn NotificationBackend>,
                BackendKind::Desktop,
            )),
            Err(e) => {
                debug!("notification server unavailable ({e}), trying notify-send");
                if is_tool_available("notify-send").await {
                    Ok((
                        Box::new(NotifySendBackend::new(app_name)) as Box<dyn NotificationBackend>,
                        BackendKind::NotifySend,
                    ))
                } else {
                    Err(BackendError::NoBackendAvailable)
                }
            }
        },
        BackendPreference::Desktop => {
            let backend = DesktopBackend::connect(app_name).await?;
            Ok((
                Box::new(backend) as Box<dyn NotificationBackend>,
                BackendKind::Desktop,
            ))
        }
        BackendPreference::NotifySend => {
            if is_tool_available("notify-send").await {
                Ok((
                    Box::new(NotifySendBackend::new(app_name)) as Box<dyn NotificationBackend>,
                    BackendKind::NotifySend,
                ))
            } else {
                Err(BackendError::NotifySendNotFound)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_kind_display() {
        assert_eq!(BackendKind::Desktop.to_string(), "desktop");
        assert_eq!(BackendKind::NotifySend.to_string(), "notify-send");
    }

    #[test]
    fn backend_preference_display() {
        assert_eq!(BackendPreference::Auto.to_string(), "auto");
        assert_eq!(BackendPreference::Desktop.to_string(), "desktop");
        assert_eq!(BackendPreference::NotifySend.to_string(), "notify-send");
    }

    #[test]
    fn backend_preference_from_str() {
        assert_eq!(
            "auto".parse::<BackendPreference>().unwrap(),
            BackendPreference::Auto
        );
        assert_eq!(
            "AUTO".parse::<BackendPreference>().unwrap(),
            BackendPreference::Auto
        );
        assert_eq!(
            "desktop".parse::<BackendPreference>().unwrap(),
            BackendPreference::Desktop
        );
        assert_eq!(
            "dbus".parse::<BackendPreference>().unwrap(),
            BackendPreference::Desktop
        );
        assert_eq!(
            "notify-send".parse::<BackendPreference>().unwrap(),
            BackendPreference::NotifySend
        );
    }

    #[test]
    fn backend_preference_from_str_invalid() {
        let err = "invalid".parse::<BackendPreference>().unwrap_err();
        assert_eq!(err.value, "invalid");
    }

    #[test]
    fn backend_preference_default() {
        assert_eq!(BackendPreference::default(), BackendPreference::Auto);
    }
}

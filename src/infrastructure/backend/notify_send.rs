//! notify-send fallback backend
//!
//! Shells out to the `notify-send` binary. This path cannot observe
//! clicks or closes, so the delegate only ever sees `displayed`/`failed`.

use std::process::Stdio;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{BackendError, NotificationBackend, NotificationDelegate};
use crate::domain::notification::{ExpireTimeout, NotificationContent, NotificationId};

/// notify-send fallback backend
pub struct NotifySendBackend {
    /// Application name for notifications
    app_name: String,
}

impl NotifySendBackend {
    /// Create a new notify-send backend
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

/// Build the notify-send argument list for the given content
fn build_args(app_name: &str, content: &NotificationContent) -> Vec<String> {
    let mut args = vec![
        "--app-name".to_string(),
        app_name.to_string(),
        "--urgency".to_string(),
        content.urgency.to_string(),
    ];

    if let Some(icon) = &content.icon {
        args.push("--icon".to_string());
        args.push(icon.clone());
    }

    match content.timeout {
        ExpireTimeout::Default => {}
        // notify-send has no "never"; zero disables expiry on most servers
        ExpireTimeout::Never => {
            args.push("--expire-time".to_string());
            args.push("0".to_string());
        }
        ExpireTimeout::Millis(ms) => {
            args.push("--expire-time".to_string());
            args.push(ms.to_string());
        }
    }

    args.push(content.title.clone());
    if !content.body.is_empty() {
        args.push(content.body.clone());
    }

    args
}

#[async_trait]
impl NotificationBackend for NotifySendBackend {
    async fn show(
        &self,
        content: &NotificationContent,
        _delegate: Arc<dyn NotificationDelegate>,
    ) -> Result<NotificationId, BackendError> {
        let status = Command::new("notify-send")
            .args(build_args(&self.app_name, content))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    BackendError::NotifySendNotFound
                } else {
                    BackendError::ShowFailed(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(BackendError::ShowFailed(format!(
                "notify-send exited with status: {}",
                status
            )));
        }

        // notify-send does not report the server-assigned id
        Ok(NotificationId(0))
    }

    async fn dismiss(&self, _id: NotificationId) -> Result<(), BackendError> {
        Err(BackendError::DismissUnsupported("notify-send"))
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::notification::Urgency;

    use super::*;

    #[test]
    fn args_carry_app_name_and_urgency() {
        let mut content = NotificationContent::new("Title", "Body");
        content.urgency = Urgency::Critical;

        let args = build_args("myapp", &content);
        assert_eq!(args[0..4], ["--app-name", "myapp", "--urgency", "critical"]);
        assert_eq!(args[args.len() - 2..], ["Title", "Body"]);
    }

    #[test]
    fn args_omit_body_when_empty() {
        let content = NotificationContent::new("Title", "");
        let args = build_args("myapp", &content);
        assert_eq!(args.last().unwrap(), "Title");
    }

    #[test]
    fn args_include_icon_when_set() {
        let mut content = NotificationContent::new("Title", "Body");
        content.icon = Some("dialog-information".to_string());

        let args = build_args("myapp", &content);
        let pos = args.iter().position(|a| a == "--icon").unwrap();
        assert_eq!(args[pos + 1], "dialog-information");
    }

    #[test]
    fn args_map_timeout_variants() {
        let mut content = NotificationContent::new("Title", "Body");
        assert!(!build_args("a", &content).contains(&"--expire-time".to_string()));

        content.timeout = ExpireTimeout::Millis(2500);
        let args = build_args("a", &content);
        let pos = args.iter().position(|a| a == "--expire-time").unwrap();
        assert_eq!(args[pos + 1], "2500");

        content.timeout = ExpireTimeout::Never;
        let args = build_args("a", &content);
        let pos = args.iter().position(|a| a == "--expire-time").unwrap();
        assert_eq!(args[pos + 1], "0");
    }

    #[tokio::test]
    async fn dismiss_is_unsupported() {
        let backend = NotifySendBackend::new("myapp");
        let err = backend.dismiss(NotificationId(1)).await.unwrap_err();
        assert!(matches!(err, BackendError::DismissUnsupported(_)));
    }
}

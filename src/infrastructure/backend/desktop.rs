//! Desktop notification backend using notify-rust
//!
//! Talks to the freedesktop notification server: builds the notification,
//! shows it on a blocking worker, and runs a watcher that translates the
//! server's close/action signals into delegate callbacks.

use std::sync::Arc;

use async_trait::async_trait;
use notify_rust::{Hint, Notification, Timeout, Urgency as NotifyUrgency};
use tracing::{debug, warn};

use crate::application::ports::{BackendError, NotificationBackend, NotificationDelegate};
use crate::domain::notification::{
    ExpireTimeout, NotificationContent, NotificationId, Urgency, DEFAULT_ACTION,
};

use super::server::ServerProbe;

/// Label for the implicit default action
const DEFAULT_ACTION_LABEL: &str = "View";

/// Sentinel action notify-rust reports when the notification closes
const CLOSED_ACTION: &str = "__closed";

/// Backend over the freedesktop notification server
pub struct DesktopBackend {
    app_name: String,
    server: ServerProbe,
}

impl DesktopBackend {
    /// Connect to the session bus and probe the server once.
    pub async fn connect(app_name: impl Into<String>) -> Result<Self, BackendError> {
        let server = ServerProbe::connect().await?;
        debug!(capabilities = ?server.capabilities(), "notification server probed");
        Ok(Self {
            app_name: app_name.into(),
            server,
        })
    }

    /// Access to the probed server (capabilities, server information)
    pub fn server(&self) -> &ServerProbe {
        &self.server
    }

    fn build(&self, content: &NotificationContent) -> Notification {
        build_notification(
            content,
            &self.app_name,
            self.server.supports_actions(),
            self.server.append_hint(),
        )
    }
}

/// Map domain content onto the notify-rust builder.
fn build_notification(
    content: &NotificationContent,
    app_name: &str,
    supports_actions: bool,
    append_hint: Option<&str>,
) -> Notification {
    let mut notification = Notification::new();
    notification
        .appname(app_name)
        .summary(&content.title)
        .body(&content.body);

    if let Some(icon) = &content.icon {
        notification.icon(icon);
    }
    if let Some(image) = &content.image {
        notification.hint(Hint::ImagePath(image.to_string_lossy().into_owned()));
    }

    // Actions turn the whole notification into a modal dialog on
    // Notify-OSD, so they are gated on the capability probe.
    if supports_actions {
        if content.actions.is_empty() {
            notification.action(DEFAULT_ACTION, DEFAULT_ACTION_LABEL);
        } else {
            for action in &content.actions {
                notification.action(&action.id, &action.label);
            }
        }
    }

    if let Some(replace_id) = content.replace_id() {
        notification.id(replace_id);
    }

    // Always try to append; unique tags opt out by replacing instead.
    if let Some(append) = append_hint {
        notification.hint(Hint::Custom(append.to_string(), "true".to_string()));
    }

    if content.silent {
        notification.hint(Hint::SuppressSound(true));
    }

    notification.urgency(map_urgency(content.urgency));
    notification.timeout(map_timeout(content.timeout));
    notification
}

#[async_trait]
impl NotificationBackend for DesktopBackend {
    async fn show(
        &self,
        content: &NotificationContent,
        delegate: Arc<dyn NotificationDelegate>,
    ) -> Result<NotificationId, BackendError> {
        let notification = self.build(content);

        // notify-rust blocks on the bus and its handle is tied to the
        // worker's connection, so show and watch on one blocking task and
        // hand back only the id.
        let (tx, rx) = tokio::sync::oneshot::channel();
        tokio::task::spawn_blocking(move || match notification.show() {
            Ok(handle) => {
                let id = NotificationId(handle.id());
                let _ = tx.send(Ok(id));
                // Blocks until the server reports an action or a close for
                // this notification, then forwards it to the delegate.
                handle.wait_for_action(move |action| match action {
                    CLOSED_ACTION => delegate.dismissed(id),
                    action => delegate.clicked(id, action),
                });
            }
            Err(e) => {
                let _ = tx.send(Err(BackendError::ShowFailed(e.to_string())));
            }
        });

        rx.await
            .map_err(|_| BackendError::ShowFailed("notification worker exited".to_string()))?
    }

    async fn dismiss(&self, id: NotificationId) -> Result<(), BackendError> {
        // The watcher observes the resulting close signal and fires
        // `dismissed`, so nothing more to report here.
        if let Err(e) = self.server.close(id).await {
            warn!("close request for notification {id} failed: {e}");
            return Err(e);
        }
        Ok(())
    }
}

fn map_urgency(urgency: Urgency) -> NotifyUrgency {
    match urgency {
        Urgency::Low => NotifyUrgency::Low,
        Urgency::Normal => NotifyUrgency::Normal,
        Urgency::Critical => NotifyUrgency::Critical,
    }
}

fn map_timeout(timeout: ExpireTimeout) -> Timeout {
    match timeout {
        ExpireTimeout::Default => Timeout::Default,
        ExpireTimeout::Never => Timeout::Never,
        ExpireTimeout::Millis(ms) => Timeout::Milliseconds(ms),
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::notification::NotificationAction;

    use super::*;

    #[test]
    fn no_actions_attached_without_server_support() {
        let mut content = NotificationContent::new("Title", "Body");
        content.actions = vec![NotificationAction::new("open", "Open")];

        let n = build_notification(&content, "myapp", false, None);
        assert!(n.actions.is_empty());
    }

    #[test]
    fn implicit_default_action_when_none_given() {
        let content = NotificationContent::new("Title", "Body");
        let n = build_notification(&content, "myapp", true, None);
        assert_eq!(n.actions, vec![DEFAULT_ACTION, DEFAULT_ACTION_LABEL]);
    }

    #[test]
    fn explicit_actions_pass_through_as_pairs() {
        let mut content = NotificationContent::new("Title", "Body");
        content.actions = vec![
            NotificationAction::new("open", "Open"),
            NotificationAction::new("retry", "Retry"),
        ];

        let n = build_notification(&content, "myapp", true, None);
        assert_eq!(n.actions, vec!["open", "Open", "retry", "Retry"]);
    }

    #[test]
    fn append_hint_set_when_server_understands_it() {
        let content = NotificationContent::new("Title", "Body");

        let n = build_notification(&content, "myapp", false, Some("x-canonical-append"));
        assert!(n
            .hints
            .contains(&Hint::Custom(
                "x-canonical-append".to_string(),
                "true".to_string()
            )));

        let n = build_notification(&content, "myapp", false, None);
        assert!(!n
            .hints
            .iter()
            .any(|h| matches!(h, Hint::Custom(name, _) if name.contains("append"))));
    }

    #[test]
    fn silent_content_suppresses_sound() {
        let mut content = NotificationContent::new("Title", "Body");
        content.silent = true;

        let n = build_notification(&content, "myapp", false, None);
        assert!(n.hints.contains(&Hint::SuppressSound(true)));
    }

    #[test]
    fn basics_map_onto_the_builder() {
        let mut content = NotificationContent::new("Title", "Body");
        content.icon = Some("dialog-information".to_string());
        content.timeout = ExpireTimeout::Millis(1500);

        let n = build_notification(&content, "myapp", false, None);
        assert_eq!(n.appname, "myapp");
        assert_eq!(n.summary, "Title");
        assert_eq!(n.body, "Body");
        assert_eq!(n.icon, "dialog-information");
        assert_eq!(n.timeout, Timeout::Milliseconds(1500));
    }

    #[test]
    fn urgency_maps_one_to_one() {
        assert_eq!(map_urgency(Urgency::Low), NotifyUrgency::Low);
        assert_eq!(map_urgency(Urgency::Normal), NotifyUrgency::Normal);
        assert_eq!(map_urgency(Urgency::Critical), NotifyUrgency::Critical);
    }

    #[test]
    fn timeout_maps_one_to_one() {
        assert_eq!(map_timeout(ExpireTimeout::Default), Timeout::Default);
        assert_eq!(map_timeout(ExpireTimeout::Never), Timeout::Never);
        assert_eq!(
            map_timeout(ExpireTimeout::Millis(1500)),
            Timeout::Milliseconds(1500)
        );
    }
}

//! Main app runner for sending notifications

use std::process::ExitCode;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::ports::{ChannelDelegate, ConfigStore};
use crate::application::{ShowInput, ShowNotification};
use crate::domain::config::AppConfig;
use crate::domain::notification::{NotificationContent, NotificationEvent};
use crate::infrastructure::{
    create_backend, BackendKind, BackendPreference, ServerProbe, XdgConfigStore,
};

use super::args::{Cli, SendOptions};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Send a notification and optionally wait for its lifecycle to end
pub async fn run_send(options: SendOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    let (backend, kind) = match create_backend(options.backend, &options.app_name).await {
        Ok(pair) => pair,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };
    debug!("using {kind} backend");

    let follow = options.wait && kind == BackendKind::Desktop;
    if options.wait && !follow {
        presenter.warn("The notify-send backend cannot report clicks; not waiting");
    }

    let content = NotificationContent {
        title: options.title,
        body: options.body,
        icon: options.icon,
        image: options.image,
        tag: options.tag,
        urgency: options.urgency,
        timeout: options.timeout,
        silent: options.silent,
        actions: options.actions,
    };

    let use_case = ShowNotification::new(backend);
    let (delegate, mut events) = ChannelDelegate::new();

    let id = match use_case
        .execute(ShowInput { content }, Arc::new(delegate))
        .await
    {
        Ok(id) => id,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if !follow {
        return ExitCode::from(EXIT_SUCCESS);
    }

    presenter.start_spinner("Waiting for the notification...");
    loop {
        tokio::select! {
            event = events.recv() => match event {
                Some(NotificationEvent::Displayed(_)) => {}
                Some(NotificationEvent::Clicked { action, .. }) => {
                    presenter.spinner_success(&format!("Action invoked: {}", action));
                    presenter.output(&action);
                    return ExitCode::from(EXIT_SUCCESS);
                }
                Some(NotificationEvent::Dismissed(_)) => {
                    presenter.spinner_success("Notification dismissed");
                    return ExitCode::from(EXIT_SUCCESS);
                }
                Some(NotificationEvent::Failed { message }) => {
                    presenter.stop_spinner();
                    presenter.error(&message);
                    return ExitCode::from(EXIT_ERROR);
                }
                None => {
                    // Watcher went away without a terminal event
                    presenter.stop_spinner();
                    return ExitCode::from(EXIT_ERROR);
                }
            },
            _ = tokio::signal::ctrl_c() => {
                presenter.stop_spinner();
                if let Err(e) = use_case.dismiss(id).await {
                    presenter.warn(&e.to_string());
                    return ExitCode::from(EXIT_ERROR);
                }
                presenter.info("Notification dismissed");
                return ExitCode::from(EXIT_SUCCESS);
            }
        }
    }
}

/// Print the notification server's capabilities, one per line
pub async fn run_caps() -> ExitCode {
    let presenter = Presenter::new();

    match ServerProbe::connect().await {
        Ok(server) => {
            for capability in server.capabilities() {
                presenter.output(capability);
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Print the notification server information triple
pub async fn run_server_info() -> ExitCode {
    let presenter = Presenter::new();

    let server = match ServerProbe::connect().await {
        Ok(server) => server,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match server.server_information().await {
        Ok(info) => {
            presenter.key_value("name", &info.name);
            presenter.key_value("vendor", &info.vendor);
            presenter.key_value("version", &info.version);
            presenter.key_value("spec_version", &info.spec_version);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Load and merge configuration from defaults, file, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Merge: defaults < file < cli
    AppConfig::defaults().merge(file_config).merge(cli_config)
}

/// Resolve CLI arguments against the merged config into send options.
/// Returns a usage error message when a value fails to parse.
pub fn build_send_options(cli: Cli, config: &AppConfig) -> Result<SendOptions, String> {
    let title = cli.title.ok_or("Missing notification title")?;

    let timeout = match cli.timeout.as_deref() {
        Some(s) => s.parse().map_err(|e| format!("{}", e))?,
        None => config.timeout_or_default(),
    };

    let urgency = match cli.urgency {
        Some(arg) => arg.into(),
        None => config.urgency_or_default(),
    };

    let backend = match cli.backend.as_deref() {
        Some(s) => s.parse().map_err(|e| format!("{}", e))?,
        None => match config.backend_or_default().parse() {
            Ok(preference) => preference,
            Err(e) => {
                warn!("ignoring configured backend: {e}");
                BackendPreference::default()
            }
        },
    };

    let mut actions = Vec::with_capacity(cli.actions.len());
    for spec in &cli.actions {
        actions.push(spec.parse().map_err(|e| format!("{}", e))?);
    }

    Ok(SendOptions {
        title,
        body: cli.body.unwrap_or_default(),
        icon: cli.icon.or_else(|| config.icon.clone()),
        image: cli.image,
        timeout,
        urgency,
        tag: cli.tag,
        silent: cli.silent,
        actions,
        wait: cli.wait,
        backend,
        app_name: cli
            .app_name
            .unwrap_or_else(|| config.app_name_or_default().to_string()),
    })
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::domain::notification::{ExpireTimeout, Urgency};
    use crate::infrastructure::BackendPreference;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(args)
    }

    #[test]
    fn options_require_a_title() {
        let cli = parse(&["desktoast"]);
        let err = build_send_options(cli, &AppConfig::defaults()).unwrap_err();
        assert!(err.contains("title"));
    }

    #[test]
    fn options_take_cli_values_over_config() {
        let cli = parse(&["desktoast", "Title", "-t", "5s", "-u", "low"]);
        let config = AppConfig {
            timeout: Some("never".to_string()),
            urgency: Some("critical".to_string()),
            ..AppConfig::defaults()
        };

        let options = build_send_options(cli, &config).unwrap();
        assert_eq!(options.timeout, ExpireTimeout::from_secs(5));
        assert_eq!(options.urgency, Urgency::Low);
    }

    #[test]
    fn options_fall_back_to_config_values() {
        let cli = parse(&["desktoast", "Title"]);
        let config = AppConfig {
            app_name: Some("myapp".to_string()),
            icon: Some("dialog-information".to_string()),
            timeout: Some("never".to_string()),
            backend: Some("notify-send".to_string()),
            ..AppConfig::defaults()
        };

        let options = build_send_options(cli, &config).unwrap();
        assert_eq!(options.app_name, "myapp");
        assert_eq!(options.icon, Some("dialog-information".to_string()));
        assert_eq!(options.timeout, ExpireTimeout::Never);
        assert_eq!(options.backend, BackendPreference::NotifySend);
    }

    #[test]
    fn options_ignore_invalid_config_backend() {
        // A hand-edited config file must not break sending
        let cli = parse(&["desktoast", "Title"]);
        let config = AppConfig {
            backend: Some("growl".to_string()),
            ..AppConfig::defaults()
        };

        let options = build_send_options(cli, &config).unwrap();
        assert_eq!(options.backend, BackendPreference::Auto);
    }

    #[test]
    fn options_reject_invalid_timeout() {
        let cli = parse(&["desktoast", "Title", "-t", "soon"]);
        let err = build_send_options(cli, &AppConfig::defaults()).unwrap_err();
        assert!(err.contains("timeout") || err.contains("Timeout"));
    }

    #[test]
    fn options_parse_action_specs() {
        let cli = parse(&["desktoast", "Title", "-a", "open:Open", "-a", "Retry"]);
        let options = build_send_options(cli, &AppConfig::defaults()).unwrap();
        assert_eq!(options.actions.len(), 2);
        assert_eq!(options.actions[0].id, "open");
        assert_eq!(options.actions[1].label, "Retry");
    }

    #[test]
    fn options_reject_invalid_action_spec() {
        let cli = parse(&["desktoast", "Title", "-a", ":nope"]);
        assert!(build_send_options(cli, &AppConfig::defaults()).is_err());
    }
}

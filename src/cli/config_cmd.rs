//! Config subcommand handling

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::domain::notification::{ExpireTimeout, Urgency};
use crate::infrastructure::BackendPreference;

use super::args::{ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Dispatch a `config` subcommand against the store
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => {
            store.init().await?;
            presenter.success(&format!(
                "Config file created at: {}",
                store.path().display()
            ));
            Ok(())
        }
        ConfigAction::Set { key, value } => set_value(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => {
            let config = store.load().await?;
            let value = field(&config, &key)?;
            presenter.output(value.as_deref().unwrap_or("(not set)"));
            Ok(())
        }
        ConfigAction::List => {
            let config = store.load().await?;
            for key in VALID_CONFIG_KEYS.iter().copied() {
                let value = field(&config, key)?;
                presenter.key_value(key, value.as_deref().unwrap_or("(not set)"));
            }
            Ok(())
        }
        ConfigAction::Path => {
            presenter.output(&store.path().display().to_string());
            Ok(())
        }
    }
}

async fn set_value<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    validate_config_value(key, value)?;

    let mut config = store.load().await?;
    *field_mut(&mut config, key)? = Some(value.to_string());
    store.save(&config).await?;

    presenter.success(&format!("{} = {}", key, value));
    Ok(())
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    }
}

fn field<'a>(config: &'a AppConfig, key: &str) -> Result<&'a Option<String>, ConfigError> {
    match key {
        "app_name" => Ok(&config.app_name),
        "icon" => Ok(&config.icon),
        "timeout" => Ok(&config.timeout),
        "urgency" => Ok(&config.urgency),
        "backend" => Ok(&config.backend),
        _ => Err(unknown_key(key)),
    }
}

fn field_mut<'a>(config: &'a mut AppConfig, key: &str) -> Result<&'a mut Option<String>, ConfigError> {
    match key {
        "app_name" => Ok(&mut config.app_name),
        "icon" => Ok(&mut config.icon),
        "timeout" => Ok(&mut config.timeout),
        "urgency" => Ok(&mut config.urgency),
        "backend" => Ok(&mut config.backend),
        _ => Err(unknown_key(key)),
    }
}

/// Reject values that would silently fall back at send time
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::InvalidValue {
        key: key.to_string(),
        message,
    };

    match key {
        "timeout" => value
            .parse::<ExpireTimeout>()
            .map(|_| ())
            .map_err(|e| invalid(e.to_string())),
        "urgency" => value
            .parse::<Urgency>()
            .map(|_| ())
            .map_err(|e| invalid(e.to_string())),
        "backend" => value
            .parse::<BackendPreference>()
            .map(|_| ())
            .map_err(|e| invalid(e.to_string())),
        "app_name" | "icon" => Ok(()),
        _ => Err(unknown_key(key)),
    }
}

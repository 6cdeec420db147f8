//! Configuration storage port interface

use async_trait::async_trait;
use std::path::Path;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for persisting the notification defaults.
///
/// A missing store is not an error: `load` on an absent file yields an
/// empty config so the merge chain falls through to the built-in defaults.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load the stored config, or an empty one when nothing is stored yet.
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Persist the given config, replacing whatever was stored.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Where the config lives, for display to the user.
    fn path(&self) -> &Path;

    /// Write the built-in defaults. Fails if something is already stored.
    async fn init(&self) -> Result<(), ConfigError>;
}

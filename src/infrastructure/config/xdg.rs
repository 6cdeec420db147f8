//! XDG config store adapter
//!
//! Persists `AppConfig` as TOML under `$XDG_CONFIG_HOME/desktoast/`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

const CONFIG_DIR: &str = "desktoast";
const CONFIG_FILE: &str = "config.toml";

/// Config store rooted at the XDG config directory
pub struct XdgConfigStore {
    path: PathBuf,
}

impl XdgConfigStore {
    pub fn new() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("~/.config"));
        Self {
            path: base.join(CONFIG_DIR).join(CONFIG_FILE),
        }
    }

    /// Store backed by an explicit file, used by tests
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn file_present(&self) -> bool {
        self.path.is_file()
    }
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.file_present() {
            return Ok(AppConfig::empty());
        }

        let raw = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ConfigError::Read(e.to_string()))?;
        toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let rendered =
            toml::to_string_pretty(config).map_err(|e| ConfigError::Write(e.to_string()))?;

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| ConfigError::Write(e.to_string()))?;
        }
        fs::write(&self.path, rendered)
            .await
            .map_err(|e| ConfigError::Write(e.to_string()))
    }

    fn path(&self) -> &Path {
        &self.path
    }

    async fn init(&self) -> Result<(), ConfigError> {
        if self.file_present() {
            return Err(ConfigError::AlreadyExists(
                self.path.display().to_string(),
            ));
        }
        self.save(&AppConfig::defaults()).await
    }
}

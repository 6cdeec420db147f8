//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::notification::{ExpireTimeout, Urgency};

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_name: Option<String>,
    pub icon: Option<String>,
    pub timeout: Option<String>,
    pub urgency: Option<String>,
    pub backend: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            app_name: Some("desktoast".to_string()),
            icon: None,
            timeout: Some("default".to_string()),
            urgency: Some("normal".to_string()),
            backend: Some("auto".to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            app_name: other.app_name.or(self.app_name),
            icon: other.icon.or(self.icon),
            timeout: other.timeout.or(self.timeout),
            urgency: other.urgency.or(self.urgency),
            backend: other.backend.or(self.backend),
        }
    }

    /// Get app name, or "desktoast" if not set
    pub fn app_name_or_default(&self) -> &str {
        self.app_name.as_deref().unwrap_or("desktoast")
    }

    /// Get timeout as parsed ExpireTimeout, or server default if not set/invalid
    pub fn timeout_or_default(&self) -> ExpireTimeout {
        self.timeout
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get urgency as parsed Urgency, or Normal if not set/invalid
    pub fn urgency_or_default(&self) -> Urgency {
        self.urgency
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get backend preference string, or "auto" if not set
    pub fn backend_or_default(&self) -> &str {
        self.backend.as_deref().unwrap_or("auto")
    }
}

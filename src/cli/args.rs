//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::notification::Urgency;

/// desktoast - desktop notifications from the command line
#[derive(Parser, Debug)]
#[command(name = "desktoast")]
#[command(version)]
#[command(about = "Send desktop notifications and follow their lifecycle")]
#[command(long_about = None)]
pub struct Cli {
    /// Notification title
    #[arg(value_name = "TITLE")]
    pub title: Option<String>,

    /// Notification body
    #[arg(value_name = "BODY")]
    pub body: Option<String>,

    /// Icon name or path
    #[arg(short, long, value_name = "ICON")]
    pub icon: Option<String>,

    /// Path to an image shown in the notification
    #[arg(long, value_name = "PATH")]
    pub image: Option<PathBuf>,

    /// How long to show the notification (default, never, 500ms, 5s, 1m)
    #[arg(short = 't', long, value_name = "TIME")]
    pub timeout: Option<String>,

    /// Urgency level
    #[arg(short = 'u', long, value_name = "LEVEL")]
    pub urgency: Option<UrgencyArg>,

    /// Coalescing tag: notifications with the same tag replace each other
    #[arg(long, value_name = "TAG")]
    pub tag: Option<String>,

    /// Ask the server not to play a sound
    #[arg(short = 's', long)]
    pub silent: bool,

    /// Add an action button (repeatable)
    #[arg(short = 'a', long = "action", value_name = "ID:LABEL")]
    pub actions: Vec<String>,

    /// Wait until the notification is clicked or dismissed
    #[arg(short = 'w', long)]
    pub wait: bool,

    /// Backend to use (auto, desktop, notify-send)
    #[arg(long, value_name = "BACKEND", env = "DESKTOAST_BACKEND")]
    pub backend: Option<String>,

    /// Application name reported to the server
    #[arg(long, value_name = "NAME")]
    pub app_name: Option<String>,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// List notification server capabilities
    Caps,
    /// Show notification server information
    ServerInfo,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Urgency argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum UrgencyArg {
    Low,
    Normal,
    Critical,
}

impl From<UrgencyArg> for Urgency {
    fn from(arg: UrgencyArg) -> Self {
        match arg {
            UrgencyArg::Low => Urgency::Low,
            UrgencyArg::Normal => Urgency::Normal,
            UrgencyArg::Critical => Urgency::Critical,
        }
    }
}

impl From<Urgency> for UrgencyArg {
    fn from(urgency: Urgency) -> Self {
        match urgency {
            Urgency::Low => UrgencyArg::Low,
            Urgency::Normal => UrgencyArg::Normal,
            Urgency::Critical => UrgencyArg::Critical,
        }
    }
}

/// Parsed send options
#[derive(Debug, Clone)]
pub struct SendOptions {
    pub title: String,
    pub body: String,
    pub icon: Option<String>,
    pub image: Option<PathBuf>,
    pub timeout: crate::domain::notification::ExpireTimeout,
    pub urgency: Urgency,
    pub tag: Option<String>,
    pub silent: bool,
    pub actions: Vec<crate::domain::notification::NotificationAction>,
    pub wait: bool,
    pub backend: crate::infrastructure::BackendPreference,
    pub app_name: String,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["app_name", "icon", "timeout", "urgency", "backend"];

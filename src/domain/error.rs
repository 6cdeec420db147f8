//! Domain error types

use thiserror::Error;

/// Error when parsing an expire timeout string
#[derive(Debug, Clone, Error)]
#[error("Invalid timeout: \"{input}\". Expected \"default\", \"never\", or a duration like 500ms, 5s, 1m, 1m30s")]
pub struct TimeoutParseError {
    pub input: String,
}

/// Error when an invalid urgency level is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid urgency: \"{input}\". Valid levels are: low, normal, critical")]
pub struct UrgencyParseError {
    pub input: String,
}

/// Error when parsing an action spec (`id:label`)
#[derive(Debug, Clone, Error)]
#[error("Invalid action: \"{input}\". Expected \"id:label\" or a bare label")]
pub struct ActionParseError {
    pub input: String,
}

/// Configuration errors, from the store or from value validation
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Could not read config file: {0}")]
    Read(String),

    #[error("Could not parse config file: {0}")]
    Parse(String),

    #[error("Could not write config file: {0}")]
    Write(String),

    #[error("Invalid config value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}

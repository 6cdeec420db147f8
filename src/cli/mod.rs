//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, and the
//! main application runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;

// Re-export commonly used types
pub use app::{
    build_send_options, load_merged_config, run_caps, run_send, run_server_info, EXIT_ERROR,
    EXIT_SUCCESS, EXIT_USAGE_ERROR,
};
pub use args::{Cli, Commands, ConfigAction, SendOptions};
pub use config_cmd::handle_config_command;
pub use presenter::Presenter;

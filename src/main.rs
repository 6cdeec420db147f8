//! desktoast CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use desktoast::cli::{
    app::{
        build_send_options, load_merged_config, run_caps, run_send, run_server_info, EXIT_ERROR,
        EXIT_USAGE_ERROR,
    },
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use desktoast::domain::config::AppConfig;
use desktoast::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    // Initialize logging (stderr, so stdout stays scriptable)
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "desktoast=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(command) = cli.command.take() {
        match command {
            Commands::Config { action } => {
                let store = XdgConfigStore::new();
                if let Err(e) = handle_config_command(action, &store, &presenter).await {
                    presenter.error(&e.to_string());
                    return ExitCode::from(EXIT_ERROR);
                }
                return ExitCode::SUCCESS;
            }
            Commands::Caps => return run_caps().await,
            Commands::ServerInfo => return run_server_info().await,
        }
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        app_name: cli.app_name.clone(),
        icon: cli.icon.clone(),
        timeout: cli.timeout.clone(),
        urgency: cli.urgency.map(|u| {
            let urgency: desktoast::domain::notification::Urgency = u.into();
            urgency.to_string()
        }),
        backend: cli.backend.clone(),
    };

    // Merge config and resolve send options
    let config = load_merged_config(cli_config).await;
    let options = match build_send_options(cli, &config) {
        Ok(options) => options,
        Err(message) => {
            presenter.error(&message);
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    run_send(options).await
}

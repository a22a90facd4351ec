//! BookDesk: book inventory and sales quotations from the terminal.
//!
//! Main entry point that loads configuration, initialises logging and
//! dispatches to the CLI.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use bookdesk_cli::Cli;
use bookdesk_core::config::AppConfig;
use bookdesk_core::error::AppError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_configuration(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = cli.execute(&config).await {
        tracing::debug!(error = %e, "Command failed");
        eprintln!("Error: {}", e.user_message());
        if e.is_authentication() {
            eprintln!(
                "Run `bookdesk auth login` and export BOOKDESK_API__TOKEN with the printed token."
            );
        }
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration(cli: &Cli) -> Result<AppConfig, AppError> {
    let env = cli.environment();
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use bookdesk_core::config::AppConfig;
use bookdesk_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration (token masked)
    Show,
    /// Validate the configuration
    Validate,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config: &AppConfig,
    env: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let masked = masked(config);
            match format {
                OutputFormat::Json => output::print_json(&masked),
                OutputFormat::Table => {
                    output::print_kv("Environment", env);
                    output::print_kv("API base URL", &masked.api.base_url);
                    output::print_kv("API token", &output::or_dash(masked.api.token.as_deref()));
                    output::print_kv("Timeout", &format!("{}s", masked.api.timeout_seconds));
                    output::print_kv("User agent", &masked.api.user_agent);
                    output::print_kv("Page size", &masked.inventory.page_size.to_string());
                    output::print_kv("Quotation sort", &masked.inventory.quotation_sort);
                    output::print_kv("Log level", &masked.logging.level);
                    output::print_kv("Log format", &masked.logging.format);
                }
            }
        }
        ConfigCommand::Validate => match config.validate() {
            Ok(()) => {
                output::print_success(&format!("Configuration '{env}' is valid"));
                println!("  API: {}", config.api.base_url);
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {e}"));
                return Err(e);
            }
        },
    }

    Ok(())
}

/// Copy of the configuration with the bearer token masked for display
fn masked(config: &AppConfig) -> AppConfig {
    let mut masked = config.clone();
    masked.api.token = masked.api.token.map(|t| mask_token(&t));
    masked
}

fn mask_token(token: &str) -> String {
    let visible: String = token.chars().take(4).collect();
    if token.chars().count() <= 8 {
        "****".to_string()
    } else {
        format!("{visible}****")
    }
}

//! CLI command definitions and dispatch.

pub mod auth;
pub mod books;
pub mod config;
pub mod inbox;
pub mod isbn;
pub mod quotations;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use bookdesk_client::ApiClient;
use bookdesk_core::config::AppConfig;
use bookdesk_core::error::AppError;
use bookdesk_service::{AuthService, RoleGate, Session};

use crate::output::OutputFormat;

/// BookDesk: book inventory and sales quotations from the terminal
#[derive(Debug, Parser)]
#[command(name = "bookdesk", version, about, long_about = None)]
pub struct Cli {
    /// Configuration overlay to load (config/<ENV>.toml); defaults to $BOOKDESK_ENV or "development"
    #[arg(long, global = true)]
    pub config_env: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// ISBN validation and conversion (offline)
    Isbn(isbn::IsbnArgs),
    /// Book inventory
    Books(books::BooksArgs),
    /// Sales quotations
    Quotations(quotations::QuotationArgs),
    /// Sales inbox
    Inbox(inbox::InboxArgs),
    /// Sign-in and password recovery
    Auth(auth::AuthArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// The configuration overlay selected by flag or environment.
    pub fn environment(&self) -> String {
        self.config_env
            .clone()
            .or_else(|| std::env::var("BOOKDESK_ENV").ok())
            .unwrap_or_else(|| "development".to_string())
    }

    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Isbn(args) => isbn::execute(args, self.format),
            Commands::Books(args) => books::execute(args, config, self.format).await,
            Commands::Quotations(args) => quotations::execute(args, config, self.format).await,
            Commands::Inbox(args) => inbox::execute(args, config, self.format).await,
            Commands::Auth(args) => auth::execute(args, config, self.format).await,
            Commands::Config(args) => config::execute(args, config, &self.environment(), self.format),
        }
    }
}

/// Helper: build the shared API client from config
pub fn api_client(config: &AppConfig) -> Result<Arc<ApiClient>, AppError> {
    Ok(Arc::new(ApiClient::new(&config.api)?))
}

/// Helper: resume the session of the configured bearer token
pub async fn require_session(client: &Arc<ApiClient>) -> Result<Session, AppError> {
    AuthService::new(client.clone()).resume().await
}

/// Helper: the role gate used by every command
pub fn role_gate() -> RoleGate {
    RoleGate::new()
}

/// Helper: ask a yes/no question unless `assume_yes` is set
pub fn confirm(prompt: &str, assume_yes: bool) -> bool {
    if assume_yes {
        return true;
    }
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .unwrap_or(false)
}

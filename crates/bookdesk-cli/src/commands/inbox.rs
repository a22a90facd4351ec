//! Inbox CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use bookdesk_core::config::AppConfig;
use bookdesk_core::error::AppError;
use bookdesk_entity::email::EmailMessage;
use bookdesk_service::{InboxController, InboxFilter};

use crate::output::{self, OutputFormat};

/// Arguments for inbox commands
#[derive(Debug, Args)]
pub struct InboxArgs {
    /// Inbox subcommand
    #[command(subcommand)]
    pub command: InboxCommand,
}

/// Inbox subcommands
#[derive(Debug, Subcommand)]
pub enum InboxCommand {
    /// List messages, newest first
    List {
        /// Only unread messages
        #[arg(short, long)]
        unread: bool,
        /// Subject or sender contains
        #[arg(short, long)]
        search: Option<String>,
    },
}

/// Message display row for table output
#[derive(Debug, Serialize, Tabled)]
struct MessageRow {
    /// Unread marker
    #[tabled(rename = "")]
    new: String,
    /// Received at
    received: String,
    /// Sender
    from: String,
    /// Subject
    subject: String,
    /// Related quotation
    quotation: String,
}

impl From<&EmailMessage> for MessageRow {
    fn from(m: &EmailMessage) -> Self {
        Self {
            new: if m.read { String::new() } else { "●".to_string() },
            received: m.received_at.format("%Y-%m-%d %H:%M").to_string(),
            from: m.from.clone(),
            subject: m.subject.clone(),
            quotation: output::or_dash(m.quotation_id.as_ref()),
        }
    }
}

/// Execute inbox commands
pub async fn execute(
    args: &InboxArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let client = super::api_client(config)?;
    let session = super::require_session(&client).await?;

    match &args.command {
        InboxCommand::List { unread, search } => {
            let inbox = InboxController::new(client.clone(), super::role_gate(), session.role());
            inbox.load().await?;
            inbox
                .set_filter(InboxFilter {
                    unread_only: *unread,
                    search: search.clone().unwrap_or_default(),
                })
                .await;

            let visible = inbox.visible().await;
            match format {
                OutputFormat::Json => output::print_json(&visible),
                OutputFormat::Table => {
                    let rows: Vec<MessageRow> = visible.iter().map(MessageRow::from).collect();
                    output::print_list(&rows, format);
                    println!("{} unread", inbox.unread_count().await);
                }
            }
        }
    }

    Ok(())
}

//! Quotation CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use bookdesk_core::config::AppConfig;
use bookdesk_core::error::AppError;
use bookdesk_core::types::SortOrder;
use bookdesk_entity::quotation::{Quotation, QuotationStatus, QuotationSummary};
use bookdesk_service::QuotationController;

use crate::output::{self, OutputFormat};

/// Arguments for quotation commands
#[derive(Debug, Args)]
pub struct QuotationArgs {
    /// Quotation subcommand
    #[command(subcommand)]
    pub command: QuotationCommand,
}

/// Quotation subcommands
#[derive(Debug, Subcommand)]
pub enum QuotationCommand {
    /// List quotations
    List {
        /// Quotation ID contains (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
        /// Sort by creation time: newest or oldest
        #[arg(long)]
        sort: Option<String>,
    },
    /// Totals and counts per status
    Summary,
}

/// Quotation display row for table output
#[derive(Debug, Serialize, Tabled)]
struct QuotationRow {
    /// Quotation ID
    id: String,
    /// Customer
    customer: String,
    /// Total
    total: String,
    /// Status
    status: String,
    /// Valid until
    valid_until: String,
    /// Created at
    created_at: String,
    /// Emailed to
    emailed_to: String,
}

impl QuotationRow {
    fn new(q: &Quotation, today: chrono::NaiveDate) -> Self {
        let valid_until = match q.valid_until {
            Some(date) if q.is_expired(today) => format!("{date} (expired)"),
            other => output::or_dash(other),
        };
        Self {
            id: q.id.to_string(),
            customer: q.customer.name.clone(),
            total: q.total.to_string(),
            status: q.status.to_string(),
            valid_until,
            created_at: q.created_at.format("%Y-%m-%d %H:%M").to_string(),
            emailed_to: output::or_dash(q.email.as_ref().map(|e| e.recipient.as_str())),
        }
    }
}

/// Summary row per status
#[derive(Debug, Serialize, Tabled)]
struct StatusRow {
    /// Status
    status: String,
    /// Number of quotations
    count: u64,
}

/// Execute quotation commands
pub async fn execute(
    args: &QuotationArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let client = super::api_client(config)?;
    let session = super::require_session(&client).await?;

    let default_sort: SortOrder = config.inventory.quotation_sort.parse()?;
    let quotations =
        QuotationController::new(client.clone(), super::role_gate(), session.role(), default_sort);
    quotations.load().await?;

    match &args.command {
        QuotationCommand::List { search, sort } => {
            if let Some(search) = search {
                quotations.set_search(search.as_str()).await;
            }
            if let Some(sort) = sort {
                quotations.set_sort(sort.parse()?).await;
            }

            let visible = quotations.visible().await;
            match format {
                OutputFormat::Json => output::print_json(&visible),
                OutputFormat::Table => {
                    let today = chrono::Utc::now().date_naive();
                    let rows: Vec<QuotationRow> =
                        visible.iter().map(|q| QuotationRow::new(q, today)).collect();
                    output::print_list(&rows, format);
                }
            }
        }
        QuotationCommand::Summary => {
            let summary = quotations.summary().await;
            match format {
                OutputFormat::Json => output::print_json(&summary),
                OutputFormat::Table => print_summary(&summary),
            }
        }
    }

    Ok(())
}

fn print_summary(summary: &QuotationSummary) {
    output::print_kv("Quotations", &summary.total_count.to_string());
    output::print_kv("Total value", &summary.total_value.to_string());
    output::print_kv(
        "Acceptance rate",
        &output::or_dash(summary.acceptance_rate().map(|r| format!("{}%", r.round_dp(1)))),
    );
    println!();

    let rows: Vec<StatusRow> = QuotationStatus::ALL
        .iter()
        .map(|s| StatusRow {
            status: s.to_string(),
            count: summary.count(*s),
        })
        .collect();
    output::print_list(&rows, OutputFormat::Table);
}

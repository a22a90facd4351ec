//! ISBN CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use bookdesk_core::error::AppError;
use bookdesk_core::isbn;

use crate::output::{self, OutputFormat};

/// Arguments for isbn commands
#[derive(Debug, Args)]
pub struct IsbnArgs {
    /// ISBN subcommand
    #[command(subcommand)]
    pub command: IsbnCommand,
}

/// ISBN subcommands
#[derive(Debug, Subcommand)]
pub enum IsbnCommand {
    /// Clean and validate one or more ISBNs
    Validate {
        /// Raw ISBN input (hyphens and spaces allowed)
        #[arg(required = true)]
        raw: Vec<String>,
    },
    /// Convert an ISBN-10 to ISBN-13
    Convert {
        /// ISBN-10 to convert
        isbn10: String,
    },
}

/// ISBN check result row
#[derive(Debug, Serialize, Tabled)]
struct IsbnRow {
    /// Input as given
    input: String,
    /// Cleaned characters
    cleaned: String,
    /// Format of a valid ISBN
    kind: String,
    /// Whether the checksum holds
    valid: bool,
}

impl IsbnRow {
    fn check(raw: &str) -> Self {
        let kind = isbn::detect_kind(raw);
        Self {
            input: raw.to_string(),
            cleaned: isbn::clean_isbn_input(raw),
            kind: output::or_dash(kind),
            valid: kind.is_some(),
        }
    }
}

/// Execute isbn commands
pub fn execute(args: &IsbnArgs, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        IsbnCommand::Validate { raw } => {
            let rows: Vec<IsbnRow> = raw.iter().map(|r| IsbnRow::check(r)).collect();
            output::print_list(&rows, format);

            let invalid = rows.iter().filter(|r| !r.valid).count();
            if invalid > 0 {
                return Err(AppError::validation(format!(
                    "{invalid} of {} ISBNs are invalid",
                    rows.len()
                )));
            }
        }
        IsbnCommand::Convert { isbn10 } => {
            let isbn13 = isbn::isbn10_to_isbn13(isbn10).ok_or_else(|| {
                AppError::validation(format!("'{isbn10}' is not a valid ISBN-10"))
            })?;
            match format {
                OutputFormat::Table => println!("{isbn13}"),
                OutputFormat::Json => output::print_json(&serde_json::json!({
                    "isbn10": isbn::clean_isbn_input(isbn10),
                    "isbn13": isbn13,
                })),
            }
        }
    }

    Ok(())
}

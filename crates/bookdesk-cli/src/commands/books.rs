//! Book inventory CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use bookdesk_core::config::AppConfig;
use bookdesk_core::error::AppError;
use bookdesk_core::types::{BookId, PaginationData};
use bookdesk_entity::book::{Book, BookFilters, Pricing};
use bookdesk_service::{BookDetail, BookDetailController, DeleteOutcome, InventoryController};

use crate::output::{self, OutputFormat};

/// Arguments for books commands
#[derive(Debug, Args)]
pub struct BooksArgs {
    /// Books subcommand
    #[command(subcommand)]
    pub command: BooksCommand,
}

/// Books subcommands
#[derive(Debug, Subcommand)]
pub enum BooksCommand {
    /// List one page of the catalog
    List {
        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: u64,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Show a book with its pricing history and statistics
    Show {
        /// Book ID
        id: String,
    },
    /// Mark a book as out of print
    OutOfPrint {
        /// Book ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Delete one or more books
    Delete {
        /// Book IDs
        #[arg(required = true)]
        ids: Vec<String>,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Server-side catalog filters
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Title contains
    #[arg(long)]
    pub title: Option<String>,
    /// Author contains
    #[arg(long)]
    pub author: Option<String>,
    /// ISBN
    #[arg(long)]
    pub isbn: Option<String>,
    /// Publication year
    #[arg(long)]
    pub year: Option<i32>,
    /// Classification code
    #[arg(long)]
    pub classification: Option<String>,
    /// Publisher name contains
    #[arg(long)]
    pub publisher: Option<String>,
}

impl From<&FilterArgs> for BookFilters {
    fn from(args: &FilterArgs) -> Self {
        Self {
            title: args.title.clone(),
            author: args.author.clone(),
            isbn: args.isbn.clone(),
            year: args.year,
            classification: args.classification.clone(),
            publisher_name: args.publisher.clone(),
        }
    }
}

/// Book display row for table output
#[derive(Debug, Serialize, Tabled)]
struct BookRow {
    /// Book ID
    id: String,
    /// Title
    title: String,
    /// Author
    author: String,
    /// Year
    year: String,
    /// Publisher
    publisher: String,
    /// ISBN
    isbn: String,
    /// Price
    price: String,
    /// Status
    status: String,
}

impl From<&Book> for BookRow {
    fn from(b: &Book) -> Self {
        Self {
            id: b.id.to_string(),
            title: b.title.clone(),
            author: b.author.clone(),
            year: output::or_dash(b.year),
            publisher: output::or_dash(b.publisher_name()),
            isbn: output::or_dash(b.isbn.as_deref()),
            price: output::or_dash(b.price),
            status: b.status.to_string(),
        }
    }
}

/// Pricing history row
#[derive(Debug, Serialize, Tabled)]
struct PricingRow {
    /// Effective date
    date: String,
    /// List rate
    rate: String,
    /// Discount
    discount: String,
    /// Net rate
    net: String,
    /// Currency
    currency: String,
    /// Source
    source: String,
}

impl From<&Pricing> for PricingRow {
    fn from(p: &Pricing) -> Self {
        Self {
            date: p.created_at.format("%Y-%m-%d").to_string(),
            rate: p.rate.to_string(),
            discount: p.discount.to_string(),
            net: p.net_rate().to_string(),
            currency: p.currency.clone(),
            source: output::or_dash(p.source.as_deref()),
        }
    }
}

/// JSON shape of `books list`
#[derive(Debug, Serialize)]
struct BookListOutput<'a> {
    data: &'a [Book],
    pagination: &'a PaginationData,
}

/// Execute books commands
pub async fn execute(
    args: &BooksArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let client = super::api_client(config)?;
    let session = super::require_session(&client).await?;
    let role = session.role();

    match &args.command {
        BooksCommand::List { page, filters } => {
            let inventory = InventoryController::new(
                client.clone(),
                super::role_gate(),
                role,
                config.inventory.page_size,
            );

            let filters = BookFilters::from(filters);
            if filters.is_empty() {
                inventory.go_to_page(*page).await?;
            } else {
                inventory.set_pending(filters).await;
                inventory.apply_filters().await?;
                if *page > 1 {
                    inventory.go_to_page(*page).await?;
                }
            }

            let view = inventory.view().await;
            match format {
                OutputFormat::Json => output::print_json(&BookListOutput {
                    data: &view.books,
                    pagination: &view.pagination,
                }),
                OutputFormat::Table => {
                    let rows: Vec<BookRow> = view.books.iter().map(BookRow::from).collect();
                    output::print_list(&rows, format);
                    print_pagination(&view.pagination);
                }
            }
        }
        BooksCommand::Show { id } => {
            let detail = BookDetailController::new(client.clone(), super::role_gate(), role);
            detail.load(&BookId::new(id.as_str())).await?;
            let Some(detail) = detail.detail().await else {
                return Err(AppError::not_found(format!("Book '{id}' not found")));
            };
            print_detail(&detail, format);
        }
        BooksCommand::OutOfPrint { id, yes } => {
            let detail = BookDetailController::new(client.clone(), super::role_gate(), role);
            if !detail.can_mark_out_of_print() {
                return Err(AppError::authorization(format!(
                    "Role '{role}' cannot mark books out of print"
                )));
            }

            let book_id = BookId::new(id.as_str());
            detail.load(&book_id).await?;
            let title = detail
                .detail()
                .await
                .map(|d| d.book.title)
                .unwrap_or_else(|| id.clone());

            if !super::confirm(&format!("Mark '{title}' as out of print?"), *yes) {
                output::print_warning("Cancelled");
                return Ok(());
            }

            detail.mark_out_of_print().await?;
            if let Some(notice) = detail.take_notice().await {
                output::print_success(&notice.message);
            }
        }
        BooksCommand::Delete { ids, yes } => {
            let inventory = InventoryController::new(
                client.clone(),
                super::role_gate(),
                role,
                config.inventory.page_size,
            );
            for id in ids {
                inventory.select(BookId::new(id.as_str())).await;
            }

            let outcome = inventory
                .bulk_delete(|count| {
                    super::confirm(
                        &format!("Delete {count} book{}?", if count == 1 { "" } else { "s" }),
                        *yes,
                    )
                })
                .await?;

            match outcome {
                DeleteOutcome::Deleted(_) => output::print_success(&outcome.message()),
                DeleteOutcome::Declined | DeleteOutcome::NothingSelected => {
                    output::print_warning(&outcome.message())
                }
            }
        }
    }

    Ok(())
}

fn print_pagination(p: &PaginationData) {
    if p.total_count == 0 {
        return;
    }
    println!(
        "Showing {}-{} of {} (page {}/{})",
        p.start_index, p.end_index, p.total_count, p.current_page, p.total_pages
    );
}

fn print_detail(detail: &BookDetail, format: OutputFormat) {
    if format == OutputFormat::Json {
        output::print_json(detail);
        return;
    }

    let book = &detail.book;
    println!("{}", book.title);
    output::print_kv("ID", book.id.as_str());
    output::print_kv("Author", &book.author);
    output::print_kv("Year", &output::or_dash(book.year));
    output::print_kv("Publisher", &output::or_dash(book.publisher_name()));
    output::print_kv("ISBN", &output::or_dash(book.isbn.as_deref()));
    output::print_kv("Classification", &output::or_dash(book.classification.as_deref()));
    output::print_kv("Price", &output::or_dash(book.price));
    output::print_kv("Status", book.status.as_str());
    output::print_kv("Quotations", &detail.statistics.total_quotations.to_string());
    output::print_kv("Quantity quoted", &detail.statistics.total_quantity.to_string());
    output::print_kv(
        "Last quoted",
        &output::or_dash(
            detail
                .statistics
                .last_quoted_at
                .map(|t| t.format("%Y-%m-%d").to_string()),
        ),
    );

    println!();
    println!("Pricing history");
    let rows: Vec<PricingRow> = detail.pricing.iter().map(PricingRow::from).collect();
    output::print_list(&rows, format);
}

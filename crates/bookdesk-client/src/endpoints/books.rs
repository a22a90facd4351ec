//! Book catalog endpoints.

use async_trait::async_trait;
use reqwest::Method;
use tracing::info;

use bookdesk_core::result::AppResult;
use bookdesk_core::types::{BookId, PageRequest, PaginationData};
use bookdesk_entity::book::{Book, BookFilters, BookStatistics, Pricing};

use crate::api::BookApi;
use crate::client::ApiClient;
use crate::dto::request::{BulkDeleteRequest, validate_request};
use crate::dto::response::{BookPage, BulkDeleteResponse, Envelope, ListResponse};

#[async_trait]
impl BookApi for ApiClient {
    async fn list_books(&self, page: PageRequest, filters: &BookFilters) -> AppResult<BookPage> {
        let mut query = page.to_query_params();
        query.extend(filters.to_query_params());

        let response: ListResponse<Book> = self
            .send_json(Method::GET, &["books"], Some(&query), None::<&()>)
            .await?;

        let on_page = response.data.len() as u64;
        let pagination = match response.pagination {
            Some(p) => PaginationData::from_server(p.page, p.limit, p.total, p.total_pages, on_page),
            None => PaginationData::from_server(
                page.page,
                page.limit,
                page
                    .page
                    .saturating_sub(1)
                    .saturating_mul(page.limit)
                    .saturating_add(on_page),
                None,
                on_page,
            ),
        };

        Ok(BookPage {
            books: response.data,
            pagination,
        })
    }

    async fn get_book(&self, id: &BookId) -> AppResult<Book> {
        let book: Envelope<Book> = self
            .send_json(Method::GET, &["books", id.as_str()], None, None::<&()>)
            .await?;
        Ok(book.into_inner())
    }

    async fn get_pricing_history(&self, id: &BookId) -> AppResult<Vec<Pricing>> {
        let pricing: Envelope<Vec<Pricing>> = self
            .send_json(Method::GET, &["books", id.as_str(), "pricing"], None, None::<&()>)
            .await?;
        Ok(pricing.into_inner())
    }

    async fn get_book_statistics(&self, id: &BookId) -> AppResult<BookStatistics> {
        let stats: Envelope<BookStatistics> = self
            .send_json(Method::GET, &["books", id.as_str(), "statistics"], None, None::<&()>)
            .await?;
        Ok(stats.into_inner())
    }

    async fn mark_out_of_print(&self, id: &BookId) -> AppResult<()> {
        self.send_empty(Method::PATCH, &["books", id.as_str(), "out-of-print"], None::<&()>)
            .await?;
        info!(book_id = %id, "Book marked out of print");
        Ok(())
    }

    async fn delete_books(&self, ids: &[BookId]) -> AppResult<u64> {
        let request = BulkDeleteRequest { ids: ids.to_vec() };
        validate_request(&request)?;

        let response: BulkDeleteResponse = self
            .send_json(Method::POST, &["books", "bulk-delete"], None, Some(&request))
            .await?;
        info!(requested = ids.len(), deleted = response.deleted, "Books deleted");
        Ok(response.deleted)
    }
}

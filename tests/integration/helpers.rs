//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use mockito::{Server, ServerGuard};
use serde_json::{Value, json};

use bookdesk_client::ApiClient;
use bookdesk_core::config::ApiConfig;

/// Bearer token every test client carries.
pub const TEST_TOKEN: &str = "test-token";

/// A mock backend plus a client pointed at it.
pub struct TestApp {
    /// The mock HTTP server
    pub server: ServerGuard,
    /// Client configured with the server URL and [`TEST_TOKEN`]
    pub client: Arc<ApiClient>,
}

impl TestApp {
    /// Start a mock backend and build a client for it
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let client = ApiClient::new(&ApiConfig {
            base_url: server.url(),
            token: Some(TEST_TOKEN.to_string()),
            ..Default::default()
        })
        .expect("Failed to build API client");

        Self {
            server,
            client: Arc::new(client),
        }
    }

    /// `Bearer <TEST_TOKEN>`
    pub fn bearer() -> String {
        format!("Bearer {TEST_TOKEN}")
    }
}

/// A book as the backend serializes it
pub fn book_json(n: usize) -> Value {
    json!({
        "id": format!("bk-{n}"),
        "title": format!("Book {n}"),
        "author": if n % 2 == 0 { "Ursula K. Le Guin" } else { "Frank Herbert" },
        "year": 1960 + n,
        "publisher": { "id": "pub-1", "name": "Ace Books" },
        "isbn": "0306406152",
        "price": "12.50",
        "status": "active"
    })
}

/// A `GET /books` body holding `ids` with the given totals
pub fn page_body(ids: impl IntoIterator<Item = usize>, page: u64, total: u64) -> String {
    let data: Vec<Value> = ids.into_iter().map(book_json).collect();
    json!({
        "data": data,
        "pagination": {
            "page": page,
            "limit": 10,
            "total": total,
            "total_pages": total.div_ceil(10)
        }
    })
    .to_string()
}

/// A quotation as the backend serializes it
pub fn quotation_json(id: &str, created_at: &str, status: &str, total: &str) -> Value {
    json!({
        "id": id,
        "customer": { "id": "cust-1", "name": "City Library", "email": "orders@citylibrary.org" },
        "subtotal": total,
        "discount": "0",
        "total": total,
        "status": status,
        "valid_until": "2024-12-31",
        "created_at": created_at
    })
}

/// A user as the backend serializes it
pub fn user_json(role: &str) -> Value {
    json!({
        "id": "user-1",
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "role": role
    })
}

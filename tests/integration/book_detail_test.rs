//! Integration tests for the book detail screen against a mock backend.

mod helpers;

use serde_json::json;

use bookdesk_core::error::ErrorKind;
use bookdesk_core::types::BookId;
use bookdesk_entity::book::BookStatus;
use bookdesk_entity::user::UserRole;
use bookdesk_service::{BookDetailController, RoleGate};

use helpers::{TestApp, book_json};

async fn mock_detail(app: &mut TestApp, status: &str) -> mockito::Mock {
    let mut book = book_json(7);
    book["status"] = json!(status);
    app.server
        .mock("GET", "/books/bk-7")
        .with_status(200)
        .with_body(json!({ "data": book }).to_string())
        .create_async()
        .await
}

async fn mock_pricing_and_statistics(app: &mut TestApp) -> (mockito::Mock, mockito::Mock) {
    let pricing = app
        .server
        .mock("GET", "/books/bk-7/pricing")
        .with_status(200)
        .with_body(
            json!({ "data": [
                { "id": "pr-1", "rate": "10.00", "discount": "0", "currency": "USD",
                  "source": "publisher", "created_at": "2023-01-01T00:00:00Z" },
                { "id": "pr-2", "rate": "12.00", "discount": "1.50", "currency": "USD",
                  "source": "distributor", "created_at": "2024-01-01T00:00:00Z" }
            ]})
            .to_string(),
        )
        .create_async()
        .await;
    let statistics = app
        .server
        .mock("GET", "/books/bk-7/statistics")
        .with_status(200)
        .with_body(r#"{"total_quotations": 3, "total_quantity": 40}"#)
        .create_async()
        .await;
    (pricing, statistics)
}

#[tokio::test]
async fn test_load_detail() {
    let mut app = TestApp::new().await;
    let _book = mock_detail(&mut app, "active").await;
    let _related = mock_pricing_and_statistics(&mut app).await;

    let ctl = BookDetailController::new(app.client.clone(), RoleGate::new(), UserRole::User);
    ctl.load(&BookId::new("bk-7")).await.expect("load");

    let detail = ctl.detail().await.expect("detail");
    assert_eq!(detail.book.title, "Book 7");
    assert_eq!(detail.book.publisher_name(), Some("Ace Books"));
    assert_eq!(detail.pricing.len(), 2);
    assert_eq!(detail.pricing[0].id.as_str(), "pr-2");
    assert_eq!(detail.statistics.total_quantity, 40);
    assert!(detail.statistics.last_quoted_at.is_none());
}

#[tokio::test]
async fn test_mark_out_of_print_refetches() {
    let mut app = TestApp::new().await;
    let active = mock_detail(&mut app, "active").await;
    let _related = mock_pricing_and_statistics(&mut app).await;

    let ctl = BookDetailController::new(
        app.client.clone(),
        RoleGate::new(),
        UserRole::InventoryManager,
    );
    ctl.load(&BookId::new("bk-7")).await.expect("load");
    assert_eq!(
        ctl.detail().await.map(|d| d.book.status),
        Some(BookStatus::Active)
    );

    active.remove_async().await;
    let refetched = mock_detail(&mut app, "out_of_print").await;
    let patch = app
        .server
        .mock("PATCH", "/books/bk-7/out-of-print")
        .match_header("authorization", TestApp::bearer().as_str())
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    ctl.mark_out_of_print().await.expect("mark");

    patch.assert_async().await;
    refetched.assert_async().await;
    assert_eq!(
        ctl.detail().await.map(|d| d.book.status),
        Some(BookStatus::OutOfPrint)
    );
}

#[tokio::test]
async fn test_any_failed_fetch_fails_the_load() {
    let mut app = TestApp::new().await;
    let _book = mock_detail(&mut app, "active").await;
    let _pricing = app.server
        .mock("GET", "/books/bk-7/pricing")
        .with_status(404)
        .with_body(r#"{"message": "No pricing for this book"}"#)
        .create_async()
        .await;
    let _statistics = app.server
        .mock("GET", "/books/bk-7/statistics")
        .with_status(200)
        .with_body(r#"{"total_quotations": 0, "total_quantity": 0}"#)
        .create_async()
        .await;

    let ctl = BookDetailController::new(app.client.clone(), RoleGate::new(), UserRole::User);
    let err = ctl.load(&BookId::new("bk-7")).await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::NotFound);
    assert!(ctl.detail().await.is_none());
}

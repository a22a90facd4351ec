//! Integration tests for the inventory screen against a mock backend.

mod helpers;

use mockito::Matcher;
use serde_json::json;

use bookdesk_core::error::ErrorKind;
use bookdesk_core::types::BookId;
use bookdesk_entity::book::BookFilters;
use bookdesk_entity::user::UserRole;
use bookdesk_service::{DeleteOutcome, InventoryController, LoadState, RoleGate};

use helpers::{TestApp, page_body};

fn inventory(app: &TestApp, role: UserRole) -> InventoryController {
    InventoryController::new(app.client.clone(), RoleGate::new(), role, 10)
}

#[tokio::test]
async fn test_load_and_paginate() {
    let mut app = TestApp::new().await;
    let first = app
        .server
        .mock("GET", "/books")
        .match_header("authorization", TestApp::bearer().as_str())
        .match_query(Matcher::Exact("page=1&limit=10".into()))
        .with_status(200)
        .with_body(page_body(1..=10, 1, 12))
        .create_async()
        .await;
    let second = app
        .server
        .mock("GET", "/books")
        .match_query(Matcher::Exact("page=2&limit=10".into()))
        .with_status(200)
        .with_body(page_body(11..=12, 2, 12))
        .create_async()
        .await;

    let ctl = inventory(&app, UserRole::User);
    ctl.load().await.expect("first page");

    let view = ctl.view().await;
    assert_eq!(view.books.len(), 10);
    assert!(view.pagination.has_next);
    assert!(!view.pagination.has_previous);

    ctl.next_page().await.expect("second page");

    let view = ctl.view().await;
    assert_eq!(view.books.len(), 2);
    assert_eq!(view.pagination.start_index, 11);
    assert_eq!(view.pagination.end_index, 12);
    assert!(!view.pagination.has_next);
    assert_eq!(view.load_state, LoadState::Ready);

    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn test_apply_and_clear_filters() {
    let mut app = TestApp::new().await;
    let _first_page = app.server
        .mock("GET", "/books")
        .match_query(Matcher::Exact("page=1&limit=10".into()))
        .with_status(200)
        .with_body(page_body(1..=10, 1, 30))
        .create_async()
        .await;
    let _second_page = app.server
        .mock("GET", "/books")
        .match_query(Matcher::Exact("page=2&limit=10".into()))
        .with_status(200)
        .with_body(page_body(11..=20, 2, 30))
        .create_async()
        .await;
    let filtered = app
        .server
        .mock("GET", "/books")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("limit".into(), "10".into()),
            Matcher::UrlEncoded("author".into(), "Le Guin".into()),
        ]))
        .with_status(200)
        .with_body(page_body([2, 4, 6], 1, 3))
        .create_async()
        .await;

    let ctl = inventory(&app, UserRole::User);
    ctl.go_to_page(2).await.expect("page 2");
    assert_eq!(ctl.view().await.pagination.current_page, 2);

    ctl.set_pending(BookFilters {
        author: Some("Le Guin".to_string()),
        title: Some("   ".to_string()),
        ..Default::default()
    })
    .await;
    ctl.apply_filters().await.expect("apply");

    let view = ctl.view().await;
    assert_eq!(view.page, 1);
    assert_eq!(view.pagination.total_count, 3);
    assert_eq!(view.books.len(), 3);
    filtered.assert_async().await;

    ctl.clear_filters().await.expect("clear");

    let view = ctl.view().await;
    assert_eq!(view.page, 1);
    assert!(view.applied.is_empty());
    assert_eq!(view.pagination.total_count, 30);
    assert_eq!(view.books[0].id, BookId::new("bk-1"));
}

#[tokio::test]
async fn test_bulk_delete_reloads_current_page() {
    let mut app = TestApp::new().await;
    let before = app
        .server
        .mock("GET", "/books")
        .match_query(Matcher::Exact("page=1&limit=10".into()))
        .with_status(200)
        .with_body(page_body(1..=5, 1, 5))
        .create_async()
        .await;

    let ctl = inventory(&app, UserRole::InventoryManager);
    ctl.load().await.expect("load");
    ctl.toggle_selected(BookId::new("bk-2")).await;
    ctl.toggle_selected(BookId::new("bk-4")).await;

    before.remove_async().await;
    let _page_after_delete = app.server
        .mock("GET", "/books")
        .match_query(Matcher::Exact("page=1&limit=10".into()))
        .with_status(200)
        .with_body(page_body([1, 3, 5], 1, 3))
        .create_async()
        .await;
    let delete = app
        .server
        .mock("POST", "/books/bulk-delete")
        .match_header("authorization", TestApp::bearer().as_str())
        .match_body(Matcher::Json(json!({ "ids": ["bk-2", "bk-4"] })))
        .with_status(200)
        .with_body(r#"{"deleted": 2}"#)
        .create_async()
        .await;

    let outcome = ctl.bulk_delete(|count| count == 2).await.expect("delete");
    assert_eq!(outcome, DeleteOutcome::Deleted(2));
    delete.assert_async().await;

    let view = ctl.view().await;
    assert!(view.selection.is_empty());
    assert_eq!(view.pagination.total_count, 3);
    assert_eq!(view.books.len(), 3);
    let notice = ctl.take_notice().await.expect("success notice");
    assert_eq!(notice.message, "Deleted 2 books");
}

#[tokio::test]
async fn test_server_rejection_keeps_selection() {
    let mut app = TestApp::new().await;
    let _list = app.server
        .mock("GET", "/books")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(page_body(1..=3, 1, 3))
        .create_async()
        .await;
    let _delete = app.server
        .mock("POST", "/books/bulk-delete")
        .with_status(403)
        .with_body(r#"{"error": "FORBIDDEN", "message": "Insufficient permissions"}"#)
        .create_async()
        .await;

    let ctl = inventory(&app, UserRole::SystemAdmin);
    ctl.load().await.expect("load");
    ctl.toggle_select_all().await;

    let err = ctl.bulk_delete(|_| true).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);
    assert_eq!(ctl.view().await.selection.len(), 3);
    assert!(ctl.take_notice().await.is_some());
}

#[tokio::test]
async fn test_server_error_replaces_content_with_error_state() {
    let mut app = TestApp::new().await;
    let _list = app.server
        .mock("GET", "/books")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body(r#"{"error": "INTERNAL", "message": "database unavailable"}"#)
        .create_async()
        .await;

    let ctl = inventory(&app, UserRole::User);
    let err = ctl.load().await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::ExternalService);
    assert!(ctl.view().await.load_state.error().is_some());
}

//! Integration tests for the quotation screen against a mock backend.

mod helpers;

use rust_decimal::Decimal;
use serde_json::json;

use bookdesk_core::types::SortOrder;
use bookdesk_entity::quotation::{Quotation, QuotationStatus};
use bookdesk_entity::user::UserRole;
use bookdesk_service::{QuotationController, RoleGate};

use helpers::{TestApp, quotation_json};

fn ids(quotations: &[Quotation]) -> Vec<String> {
    quotations.iter().map(|q| q.id.to_string()).collect()
}

async fn seeded_app() -> (TestApp, mockito::Mock) {
    let mut app = TestApp::new().await;
    let list = app
        .server
        .mock("GET", "/quotations")
        .match_header("authorization", TestApp::bearer().as_str())
        .with_status(200)
        .with_body(
            json!({
                "data": [
                    quotation_json("QT-2024-0007", "2024-03-01T10:00:00Z", "sent", "1250.00"),
                    quotation_json("QT-2024-0003", "2024-01-15T08:30:00Z", "accepted", "980.50"),
                    quotation_json("QT-2023-0112", "2023-11-20T16:45:00Z", "rejected", "300.00"),
                    quotation_json("QT-2024-0009", "2024-03-05T12:00:00Z", "draft", "75.25"),
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;
    (app, list)
}

#[tokio::test]
async fn test_sorting_by_creation_time() {
    let (app, _list) = seeded_app().await;
    let ctl = QuotationController::new(
        app.client.clone(),
        RoleGate::new(),
        UserRole::SalesExecutive,
        SortOrder::Newest,
    );
    ctl.load().await.expect("load");

    let newest = ids(&ctl.visible().await);
    assert_eq!(
        newest,
        vec!["QT-2024-0009", "QT-2024-0007", "QT-2024-0003", "QT-2023-0112"]
    );

    ctl.set_sort(SortOrder::Oldest).await;
    let mut oldest = ids(&ctl.visible().await);
    oldest.reverse();
    assert_eq!(oldest, newest);
}

#[tokio::test]
async fn test_search_filters_on_identifier_only() {
    let (app, _list) = seeded_app().await;
    let ctl = QuotationController::new(
        app.client.clone(),
        RoleGate::new(),
        UserRole::InventoryManager,
        SortOrder::Oldest,
    );
    ctl.load().await.expect("load");

    ctl.set_search("qt-2024").await;
    assert_eq!(
        ids(&ctl.visible().await),
        vec!["QT-2024-0003", "QT-2024-0007", "QT-2024-0009"]
    );

    ctl.set_search("City Library").await;
    assert!(ctl.visible().await.is_empty());
}

#[tokio::test]
async fn test_summary_from_fetched_set() {
    let (app, _list) = seeded_app().await;
    let ctl = QuotationController::new(
        app.client.clone(),
        RoleGate::new(),
        UserRole::AgentAdmin,
        SortOrder::Newest,
    );
    ctl.load().await.expect("load");

    let summary = ctl.summary().await;
    assert_eq!(summary.total_count, 4);
    assert_eq!(summary.total_value, Decimal::new(260575, 2));
    for status in QuotationStatus::ALL {
        assert_eq!(summary.count(status), 1, "{status}");
    }
    assert_eq!(summary.acceptance_rate(), Some(Decimal::from(50)));
}

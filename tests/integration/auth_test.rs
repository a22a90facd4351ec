//! Integration tests for sign-in and password recovery against a mock backend.

mod helpers;

use mockito::Matcher;
use serde_json::json;

use bookdesk_core::error::ErrorKind;
use bookdesk_entity::user::UserRole;
use bookdesk_service::{
    AuthService, Permission, RECOVERY_START, RecoveryFlow, ResetOutcome, RoleGate,
};

use helpers::{TestApp, user_json};

#[tokio::test]
async fn test_login_then_whoami_uses_new_token() {
    let mut app = TestApp::new().await;
    let _login = app.server
        .mock("POST", "/auth/login")
        .match_body(Matcher::Json(
            json!({ "email": "ada@example.com", "password": "Analytical1" }),
        ))
        .with_status(200)
        .with_body(json!({ "token": "fresh-token", "user": user_json("sales_executive") }).to_string())
        .create_async()
        .await;
    let me = app
        .server
        .mock("GET", "/auth/me")
        .match_header("authorization", "Bearer fresh-token")
        .with_status(200)
        .with_body(user_json("sales_executive").to_string())
        .create_async()
        .await;

    let auth = AuthService::new(app.client.clone());
    let session = auth
        .login("ada@example.com", "Analytical1")
        .await
        .expect("login");
    assert_eq!(session.role(), UserRole::SalesExecutive);

    let gate = RoleGate::new();
    assert!(gate.allows(session.role(), Permission::ManageQuotations));
    assert!(!gate.allows(session.role(), Permission::DeleteBooks));

    let resumed = auth.resume().await.expect("resume");
    assert_eq!(resumed.token, session.token);
    assert_eq!(resumed.user.email, "ada@example.com");
    me.assert_async().await;
}

#[tokio::test]
async fn test_login_rejected() {
    let mut app = TestApp::new().await;
    let _login = app.server
        .mock("POST", "/auth/login")
        .with_status(401)
        .with_body(r#"{"error": "UNAUTHORIZED", "message": "Invalid email or password"}"#)
        .create_async()
        .await;

    let err = AuthService::new(app.client.clone())
        .login("ada@example.com", "wrong")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authentication);
    assert_eq!(err.message, "Invalid email or password");
}

#[tokio::test]
async fn test_forgot_password() {
    let mut app = TestApp::new().await;
    let mock = app
        .server
        .mock("POST", "/auth/forgot-password")
        .match_body(Matcher::Json(json!({ "email": "ada@example.com" })))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let message = RecoveryFlow::new(app.client.clone())
        .request_reset("ada@example.com")
        .await
        .expect("request");
    assert!(message.contains("reset link"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_reset_password_success() {
    let mut app = TestApp::new().await;
    let mock = app
        .server
        .mock("POST", "/auth/reset-password")
        .match_body(Matcher::Json(
            json!({ "token": "reset-abc123", "password": "Difference2" }),
        ))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let outcome = RecoveryFlow::new(app.client.clone())
        .submit_reset("reset-abc123", "Difference2", "Difference2")
        .await
        .expect("reset");
    assert_eq!(outcome, ResetOutcome::Completed);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_expired_token_redirects_to_recovery_start() {
    let mut app = TestApp::new().await;
    let _reset = app.server
        .mock("POST", "/auth/reset-password")
        .with_status(400)
        .with_body(r#"{"message": "Reset token has expired"}"#)
        .create_async()
        .await;

    let outcome = RecoveryFlow::new(app.client.clone())
        .submit_reset("reset-old", "Difference2", "Difference2")
        .await
        .expect("redirect");
    assert_eq!(outcome, ResetOutcome::Redirect(RECOVERY_START));
}

#[tokio::test]
async fn test_weak_password_never_reaches_backend() {
    let mut app = TestApp::new().await;
    let mock = app
        .server
        .mock("POST", "/auth/reset-password")
        .expect(0)
        .create_async()
        .await;

    let err = RecoveryFlow::new(app.client.clone())
        .submit_reset("reset-abc123", "password", "password")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    mock.assert_async().await;
}

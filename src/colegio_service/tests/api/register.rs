use colegio_application::ACTIVATION_EMAIL_SUBJECT;
use colegio_core::{ActivationToken, ActivationTokenStore, StoreError, TokenValue};
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn register_returns_201_and_sends_activation_email() {
    let app = TestApp::new().await;

    let body = app.register("a@x.com").await;

    assert_eq!(body["email"], "a@x.com");
    assert_eq!(body["enabled"], false);
    assert!(body["id"].is_i64());
    assert!(body.get("password_hash").is_none());

    let emails = app.sent_emails().await;
    assert_eq!(emails.len(), 1);
    assert_eq!(emails[0].recipient, "a@x.com");
    assert_eq!(emails[0].subject, ACTIVATION_EMAIL_SUBJECT);
    assert!(emails[0].html_body.contains("/reenviarTokenActivacion/"));
}

#[tokio::test]
async fn duplicate_email_returns_409() {
    let app = TestApp::new().await;
    app.register("a@x.com").await;

    let response = app
        .post_register(&json!({ "email": "a@x.com", "password": "other" }))
        .await;

    assert_eq!(response.status().as_u16(), 409);
    assert_eq!(app.sent_emails().await.len(), 1);
}

#[tokio::test]
async fn malformed_input_returns_400() {
    let app = TestApp::new().await;

    let cases = [
        json!({ "email": "not-an-email", "password": "p" }),
        json!({ "email": "a@x.com", "password": "   " }),
    ];

    for case in cases {
        let response = app.post_register(&case).await;
        assert_eq!(response.status().as_u16(), 400, "case: {case}");
    }
    assert!(app.sent_emails().await.is_empty());
}

#[tokio::test]
async fn email_exists_reflects_registrations() {
    let app = TestApp::new().await;

    let before: serde_json::Value = app.get_email_exists("a@x.com").await.json().await.unwrap();
    app.register("a@x.com").await;
    let after: serde_json::Value = app.get_email_exists("a@x.com").await.json().await.unwrap();

    assert_eq!(before["exists"], false);
    assert_eq!(after["exists"], true);
}

struct UnavailableTokenStore;

#[async_trait::async_trait]
impl ActivationTokenStore for UnavailableTokenStore {
    async fn find_by_token(
        &self,
        _token: &TokenValue,
    ) -> Result<Option<ActivationToken>, StoreError> {
        Err(StoreError::UnexpectedError("connection refused".to_string()))
    }

    async fn save(&self, _token: ActivationToken) -> Result<ActivationToken, StoreError> {
        Err(StoreError::UnexpectedError("connection refused".to_string()))
    }
}

#[tokio::test]
async fn token_failure_after_registration_is_a_server_error() {
    let app = TestApp::with_activation_tokens(UnavailableTokenStore).await;

    let first = app
        .post_register(&json!({ "email": "a@x.com", "password": "p" }))
        .await;
    let retry = app
        .post_register(&json!({ "email": "a@x.com", "password": "p" }))
        .await;

    assert_eq!(first.status().as_u16(), 500);
    assert_eq!(retry.status().as_u16(), 409);
    assert!(app.sent_emails().await.is_empty());

    let exists: serde_json::Value = app.get_email_exists("a@x.com").await.json().await.unwrap();
    assert_eq!(exists["exists"], true);
}

use crate::helpers::{TestApp, token_from_body};

#[tokio::test]
async fn activation_link_enables_the_account() {
    let app = TestApp::new().await;
    app.register("a@x.com").await;
    let token = app.latest_token_for("a@x.com").await;

    let response = app.get_activate(&token).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["enabled"], true);
}

#[tokio::test]
async fn unknown_token_returns_404() {
    let app = TestApp::new().await;

    assert_eq!(app.get_activate("nope").await.status().as_u16(), 404);
    assert_eq!(app.get_resend("nope").await.status().as_u16(), 404);
}

#[tokio::test]
async fn resend_replaces_the_token() {
    let app = TestApp::new().await;
    app.register("a@x.com").await;
    let old_token = app.latest_token_for("a@x.com").await;

    let response = app.get_resend(&old_token).await;
    assert_eq!(response.status().as_u16(), 200);

    let emails = app.sent_emails().await;
    assert_eq!(emails.len(), 2);
    let new_token = token_from_body(&emails[1].html_body);
    assert_ne!(new_token, old_token);

    assert_eq!(app.get_activate(&old_token).await.status().as_u16(), 404);
    assert_eq!(app.get_activate(&new_token).await.status().as_u16(), 200);
}

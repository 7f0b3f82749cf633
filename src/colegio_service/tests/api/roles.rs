use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn assigning_a_role_records_the_caller() {
    let app = TestApp::new().await;
    let admin = app.register("admin@x.com").await;
    let student = app.register("student@x.com").await;
    let student_id = student["id"].as_i64().unwrap();

    let response = app
        .post_role(
            student_id,
            &json!({ "account_id": student_id, "role_id": 2 }),
            Some("admin@x.com"),
        )
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["id"].is_i64());
    assert_eq!(body["created_by"], admin["id"]);
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn missing_caller_header_returns_401() {
    let app = TestApp::new().await;
    let student = app.register("student@x.com").await;
    let student_id = student["id"].as_i64().unwrap();

    let response = app
        .post_role(
            student_id,
            &json!({ "account_id": student_id, "role_id": 2 }),
            None,
        )
        .await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn path_and_body_accounts_must_match() {
    let app = TestApp::new().await;
    app.register("admin@x.com").await;
    let student = app.register("student@x.com").await;
    let student_id = student["id"].as_i64().unwrap();

    let response = app
        .post_role(
            student_id,
            &json!({ "account_id": student_id + 100, "role_id": 2 }),
            Some("admin@x.com"),
        )
        .await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn unknown_account_returns_404() {
    let app = TestApp::new().await;
    app.register("admin@x.com").await;

    let response = app
        .post_role(
            999,
            &json!({ "account_id": 999, "role_id": 2 }),
            Some("admin@x.com"),
        )
        .await;

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn caller_without_account_returns_500() {
    let app = TestApp::new().await;
    let student = app.register("student@x.com").await;
    let student_id = student["id"].as_i64().unwrap();

    let response = app
        .post_role(
            student_id,
            &json!({ "account_id": student_id, "role_id": 2 }),
            Some("ghost@x.com"),
        )
        .await;

    assert_eq!(response.status().as_u16(), 500);
}

#[tokio::test]
async fn removing_a_role_deletes_it_once() {
    let app = TestApp::new().await;
    app.register("admin@x.com").await;
    let student = app.register("student@x.com").await;
    let student_id = student["id"].as_i64().unwrap();
    let saved: serde_json::Value = app
        .post_role(
            student_id,
            &json!({ "account_id": student_id, "role_id": 2 }),
            Some("admin@x.com"),
        )
        .await
        .json()
        .await
        .unwrap();

    let first = app.delete_role(student_id, &saved, "admin@x.com").await;
    let second = app.delete_role(student_id, &saved, "admin@x.com").await;

    assert_eq!(first.status().as_u16(), 204);
    assert_eq!(second.status().as_u16(), 404);
}

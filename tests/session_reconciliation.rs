//! Integration tests for carrying privilege changes into issued sessions.
//!
//! A moderation action records the change with the broker; the target's
//! next request reconciles its session before any handler runs.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{uid, TestApp, THREAD_HEX};
use forum_moderation::domain::moderation::Role;
use forum_moderation::domain::session::{SessionSnapshot, SessionToken};
use forum_moderation::ports::SessionStore;

fn thread_uri() -> String {
    format!("/threads/{}", THREAD_HEX)
}

#[tokio::test]
async fn banned_user_is_locked_out_on_next_request() {
    let app = TestApp::new().await;
    assert_eq!(app.get(&thread_uri(), Some("alice")).await.status(), StatusCode::OK);

    app.post("/moderator/users/alice/ban", "mia").await;
    assert_eq!(app.broker.pending_count().await, 1);

    let response = app.get(&thread_uri(), Some("alice")).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(app.session_of("alice").await.is_banned);
    assert_eq!(app.broker.pending_count().await, 0);
}

#[tokio::test]
async fn banned_session_stays_banned_after_consumption() {
    let app = TestApp::new().await;
    app.post("/moderator/users/alice/ban", "mia").await;

    app.get(&thread_uri(), Some("alice")).await;
    let response = app.get(&thread_uri(), Some("alice")).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn unban_restores_access() {
    let app = TestApp::new().await;
    app.post("/moderator/users/alice/ban", "mia").await;
    assert_eq!(app.get(&thread_uri(), Some("alice")).await.status(), StatusCode::FORBIDDEN);

    app.post("/moderator/users/alice/unban", "ada").await;

    assert_eq!(app.get(&thread_uri(), Some("alice")).await.status(), StatusCode::OK);
    assert!(!app.session_of("alice").await.is_banned);
}

#[tokio::test]
async fn demoted_moderator_loses_moderator_pages() {
    let app = TestApp::new().await;
    assert_eq!(app.get("/moderator", Some("mia")).await.status(), StatusCode::OK);

    app.post_json("/moderator/users/mia/role", "ada", json!({ "role": "user" }))
        .await;

    assert_eq!(app.get("/moderator", Some("mia")).await.status(), StatusCode::FORBIDDEN);
    assert_eq!(app.session_of("mia").await.role, Role::User);
}

#[tokio::test]
async fn promoted_user_gains_moderator_pages() {
    let app = TestApp::new().await;
    assert_eq!(app.get("/moderator", Some("bob")).await.status(), StatusCode::FORBIDDEN);

    app.post_json("/moderator/users/bob/role", "ada", json!({ "role": "moderator" }))
        .await;

    assert_eq!(app.get("/moderator", Some("bob")).await.status(), StatusCode::OK);
}

#[tokio::test]
async fn refused_action_records_nothing() {
    let app = TestApp::new().await;

    let response = app.post("/moderator/users/max/ban", "mia").await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(app.broker.pending_count().await, 0);
    assert!(!app.session_of("max").await.is_banned);
}

#[tokio::test]
async fn pending_change_is_consumed_by_first_session_only() {
    let app = TestApp::new().await;
    let phone = SessionToken::new("tok-alice-phone").unwrap();
    app.sessions
        .save(&phone, &SessionSnapshot::new(uid("alice"), Role::User))
        .await
        .unwrap();

    app.post("/moderator/users/alice/ban", "mia").await;

    assert_eq!(app.get(&thread_uri(), Some("alice")).await.status(), StatusCode::FORBIDDEN);
    let phone_response = app.get(&thread_uri(), Some("alice-phone")).await;
    assert_eq!(phone_response.status(), StatusCode::OK);
    assert!(!app.sessions.load(&phone).await.unwrap().unwrap().is_banned);
}

#[tokio::test]
async fn session_endpoint_reports_reconciled_role() {
    let app = TestApp::new().await;
    app.post_json("/moderator/users/bob/role", "ada", json!({ "role": "moderator" }))
        .await;

    let body = common::json_body(app.get("/session", Some("bob")).await).await;

    assert_eq!(body["authenticated"], true);
    assert_eq!(body["user_id"], "bob");
    assert_eq!(body["role"], "moderator");
    assert_eq!(body["is_banned"], false);
}

#[tokio::test]
async fn session_endpoint_answers_anonymous_callers() {
    let app = TestApp::new().await;

    let response = app.get("/session", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::json_body(response).await;
    assert_eq!(body["authenticated"], false);
    assert!(body.get("user_id").is_none());
}

#[tokio::test]
async fn session_endpoint_shows_ban_without_rejecting() {
    let app = TestApp::new().await;
    app.post("/moderator/users/alice/ban", "mia").await;

    let response = app.get("/session", Some("alice")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(common::json_body(response).await["is_banned"], true);
}

#[tokio::test]
async fn session_endpoint_treats_unknown_token_as_anonymous() {
    let app = TestApp::new().await;

    let response = app.get("/session", Some("mallory")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(common::json_body(response).await["authenticated"], false);
}

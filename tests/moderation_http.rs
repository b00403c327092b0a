//! Integration tests for the moderator HTTP surface.
//!
//! Drives the full router (session middleware, throttle, handlers) over
//! in-memory stores.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{assert_redirect, json_body, uid, TestApp};
use forum_moderation::domain::foundation::PostId;
use forum_moderation::domain::moderation::{PostModerationState, Role};
use forum_moderation::ports::{PostRepository, UserRepository};

async fn post_state(app: &TestApp, id: &str) -> Option<PostModerationState> {
    app.posts
        .find_by_id(&PostId::new(id).unwrap())
        .await
        .unwrap()
        .map(|p| p.moderation_state())
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn health_needs_no_session() {
    let app = TestApp::new().await;
    assert_eq!(app.get("/health", None).await.status(), StatusCode::OK);
}

#[tokio::test]
async fn moderator_pages_require_a_session() {
    let app = TestApp::new().await;
    let response = app.get("/moderator", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_token_is_unauthorized() {
    let app = TestApp::new().await;
    let response = app.get("/moderator", Some("mallory")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn plain_user_cannot_open_moderator_pages() {
    let app = TestApp::new().await;
    assert_eq!(app.get("/moderator", Some("alice")).await.status(), StatusCode::FORBIDDEN);
    assert_eq!(app.get("/moderator/users", Some("alice")).await.status(), StatusCode::FORBIDDEN);
}

// =============================================================================
// Reported posts
// =============================================================================

#[tokio::test]
async fn reported_post_shows_up_for_moderators() {
    let app = TestApp::new().await;

    let response = app.post("/posts/p2/report", "alice").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.get("/moderator", Some("mia")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let posts = body["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["id"], "p2");
    assert_eq!(posts[0]["state"], "reported");
}

#[tokio::test]
async fn clearing_a_report_returns_post_to_visible() {
    let app = TestApp::new().await;
    app.post("/posts/p2/report", "alice").await;

    let response = app.post("/moderator/post/p2/clear-report", "mia").await;

    assert_redirect(&response, "/moderator");
    assert_eq!(post_state(&app, "p2").await, Some(PostModerationState::Visible));
    let body = json_body(app.get("/moderator", Some("mia")).await).await;
    assert!(body["posts"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn fulfilled_post_cannot_be_reported_again() {
    let app = TestApp::new().await;

    let response = app.post("/moderator/post/p1/fulfill", "mia").await;
    assert_redirect(&response, "/moderator");
    assert_eq!(post_state(&app, "p1").await, Some(PostModerationState::Fulfilled));

    let response = app.post("/posts/p1/report", "bob").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(post_state(&app, "p1").await, Some(PostModerationState::Fulfilled));
}

#[tokio::test]
async fn deleting_twice_is_not_found() {
    let app = TestApp::new().await;

    assert_redirect(&app.post("/moderator/post/p2/delete", "ada").await, "/moderator");
    assert_eq!(post_state(&app, "p2").await, None);

    let response = app.post("/moderator/post/p2/delete", "ada").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn reporting_unknown_post_is_not_found() {
    let app = TestApp::new().await;
    let response = app.post("/posts/nope/report", "alice").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn plain_user_cannot_delete_posts() {
    let app = TestApp::new().await;
    let response = app.post("/moderator/post/p1/delete", "bob").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(post_state(&app, "p1").await, Some(PostModerationState::Visible));
}

// =============================================================================
// Bans
// =============================================================================

#[tokio::test]
async fn moderator_bans_user_and_is_redirected() {
    let app = TestApp::new().await;

    let response = app.post("/moderator/users/alice/ban", "mia").await;

    assert_redirect(&response, "/moderator/users");
    let alice = app.users.find_by_id(&uid("alice")).await.unwrap().unwrap();
    assert!(alice.is_banned());
    assert_eq!(alice.banned_by(), Some(&uid("mia")));
}

#[tokio::test]
async fn moderator_cannot_ban_another_moderator() {
    let app = TestApp::new().await;

    let response = app.post("/moderator/users/max/ban", "mia").await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = json_body(response).await;
    assert_eq!(
        body["message"],
        "Permission denied: moderators cannot ban other moderators"
    );
    assert!(!app.users.find_by_id(&uid("max")).await.unwrap().unwrap().is_banned());
}

#[tokio::test]
async fn admin_bans_moderator() {
    let app = TestApp::new().await;
    assert_redirect(&app.post("/moderator/users/max/ban", "ada").await, "/moderator/users");
    assert!(app.users.find_by_id(&uid("max")).await.unwrap().unwrap().is_banned());
}

#[tokio::test]
async fn admins_are_never_banned() {
    let app = TestApp::new().await;
    for actor in ["mia", "alan"] {
        let response = app.post("/moderator/users/ada/ban", actor).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "{}", actor);
    }
    assert!(!app.users.find_by_id(&uid("ada")).await.unwrap().unwrap().is_banned());
}

#[tokio::test]
async fn banning_unknown_account_is_not_found() {
    let app = TestApp::new().await;
    let response = app.post("/moderator/users/ghost/ban", "mia").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn only_admins_unban() {
    let app = TestApp::new().await;
    app.post("/moderator/users/alice/ban", "mia").await;

    let response = app.post("/moderator/users/alice/unban", "mia").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app.post("/moderator/users/alice/unban", "ada").await;
    assert_redirect(&response, "/moderator/users");
    let alice = app.users.find_by_id(&uid("alice")).await.unwrap().unwrap();
    assert!(!alice.is_banned());
    assert!(alice.banned_by().is_none());
}

#[tokio::test]
async fn bannable_users_listing_excludes_admins() {
    let app = TestApp::new().await;

    let ids = |body: serde_json::Value| -> Vec<String> {
        body["users"]
            .as_array()
            .unwrap()
            .iter()
            .map(|u| u["id"].as_str().unwrap().to_string())
            .collect()
    };

    for actor in ["mia", "ada"] {
        let listed = ids(json_body(app.get("/moderator/users", Some(actor)).await).await);
        assert_eq!(listed, vec!["alice", "bob", "max", "mia"], "{}", actor);
    }
}

// =============================================================================
// Roles
// =============================================================================

#[tokio::test]
async fn admin_promotes_user() {
    let app = TestApp::new().await;

    let response = app
        .post_json("/moderator/users/bob/role", "ada", json!({ "role": "moderator" }))
        .await;

    assert_redirect(&response, "/moderator/users");
    let bob = app.users.find_by_id(&uid("bob")).await.unwrap().unwrap();
    assert_eq!(bob.role(), Role::Moderator);
    assert_eq!(bob.role_updated_by(), Some(&uid("ada")));
}

#[tokio::test]
async fn promotion_to_admin_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .post_json("/moderator/users/bob/role", "ada", json!({ "role": "admin" }))
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        app.users.find_by_id(&uid("bob")).await.unwrap().unwrap().role(),
        Role::User
    );
}

#[tokio::test]
async fn unknown_role_name_is_bad_request() {
    let app = TestApp::new().await;

    let response = app
        .post_json("/moderator/users/bob/role", "ada", json!({ "role": "superuser" }))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["details"]["field"], "role");
}

#[tokio::test]
async fn moderator_cannot_change_roles() {
    let app = TestApp::new().await;
    let response = app
        .post_json("/moderator/users/bob/role", "mia", json!({ "role": "moderator" }))
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn another_admins_role_is_immutable() {
    let app = TestApp::new().await;
    let response = app
        .post_json("/moderator/users/alan/role", "ada", json!({ "role": "user" }))
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        app.users.find_by_id(&uid("alan")).await.unwrap().unwrap().role(),
        Role::Admin
    );
}

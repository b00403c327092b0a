//! Axum router configuration for moderation endpoints.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use super::super::middleware::{throttle_middleware, ThrottleState};
use super::super::state::AppState;
use super::handlers::{
    ban_user, clear_report, delete_post, list_bannable_users, list_reported_posts,
    mark_fulfilled, report_post, unban_user, update_user_role,
};

/// Throttle resource name for post reports.
pub const POST_REPORTS: &str = "post_reports";

/// Create the moderator router.
///
/// # Routes
///
/// ## Staff Endpoints (moderator or admin session)
/// - `GET /moderator` - Reported posts
/// - `POST /moderator/post/:id/clear-report`
/// - `POST /moderator/post/:id/fulfill`
/// - `POST /moderator/post/:id/delete`
/// - `GET /moderator/users` - Bannable accounts
/// - `POST /moderator/users/:id/ban`
///
/// ## Admin Endpoints (admin session)
/// - `POST /moderator/users/:id/unban`
/// - `POST /moderator/users/:id/role`
pub fn moderator_routes() -> Router<AppState> {
    Router::new()
        .route("/moderator", get(list_reported_posts))
        .route("/moderator/post/:id/clear-report", post(clear_report))
        .route("/moderator/post/:id/fulfill", post(mark_fulfilled))
        .route("/moderator/post/:id/delete", post(delete_post))
        .route("/moderator/users", get(list_bannable_users))
        .route("/moderator/users/:id/ban", post(ban_user))
        .route("/moderator/users/:id/unban", post(unban_user))
        .route("/moderator/users/:id/role", post(update_user_role))
}

/// Create the member-facing post router.
///
/// # Routes
/// - `POST /posts/:id/report` - Throttled per account
pub fn post_routes(state: &AppState) -> Router<AppState> {
    let throttle = ThrottleState::new(state, POST_REPORTS);
    Router::new().route(
        "/posts/:id/report",
        post(report_post).layer(middleware::from_fn_with_state(throttle, throttle_middleware)),
    )
}

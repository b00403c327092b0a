//! Top-level router assembly.

use std::time::Duration;

use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::middleware::{session_middleware, OptionalSession};
use super::moderation::{moderator_routes, post_routes};
use super::state::AppState;
use super::threads::thread_routes;

/// Build the complete application router.
///
/// Layer order, outermost first: tracing, timeout, session. Every route
/// therefore sees a reconciled session.
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/session", get(current_session))
        .merge(moderator_routes())
        .merge(post_routes(&state))
        .merge(thread_routes(&state))
        .layer(middleware::from_fn_with_state(state.clone(), session_middleware))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// Reconciled view of the caller's session.
#[derive(Debug, Serialize)]
struct SessionView {
    authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    is_banned: bool,
}

/// GET /session - never rejects; anonymous callers get `authenticated: false`.
async fn current_session(OptionalSession(session): OptionalSession) -> Json<SessionView> {
    Json(match session {
        Some(s) => SessionView {
            authenticated: true,
            user_id: Some(s.user_id.to_string()),
            role: Some(s.role.to_string()),
            is_banned: s.is_banned,
        },
        None => SessionView {
            authenticated: false,
            user_id: None,
            role: None,
            is_banned: false,
        },
    })
}

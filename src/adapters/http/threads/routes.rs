//! Axum router configuration for thread endpoints.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use super::super::middleware::{throttle_middleware, ThrottleState};
use super::super::state::AppState;
use super::handlers::{get_thread, send_message};

/// Throttle resource name for thread messages.
pub const THREAD_MESSAGES: &str = "thread_messages";

/// # Routes
/// - `GET /threads/:id`
/// - `POST /threads/:id/messages` - Throttled per account
pub fn thread_routes(state: &AppState) -> Router<AppState> {
    let throttle = ThrottleState::new(state, THREAD_MESSAGES);
    Router::new().route("/threads/:id", get(get_thread)).route(
        "/threads/:id/messages",
        post(send_message).layer(middleware::from_fn_with_state(throttle, throttle_middleware)),
    )
}

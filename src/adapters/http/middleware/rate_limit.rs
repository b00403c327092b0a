//! Throttle middleware for axum.
//!
//! Enforces the minimum interval between write actions of one principal
//! using the `RateLimiter` port. Must run inside `session_middleware` so
//! the session is available to build the key.
//!
//! # Example
//!
//! ```ignore
//! let throttle = ThrottleState::new(&state, "thread_messages");
//! let route = post(send_message)
//!     .layer(middleware::from_fn_with_state(throttle, throttle_middleware));
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::domain::foundation::Timestamp;
use crate::domain::moderation::ModerationError;
use crate::domain::session::SessionSnapshot;
use crate::ports::{RateLimitKey, RateLimitResult, RateLimiter};

use super::super::error::ApiError;
use super::super::state::AppState;

/// Per-route throttle configuration.
#[derive(Clone)]
pub struct ThrottleState {
    limiter: Arc<dyn RateLimiter>,
    resource: &'static str,
    window: chrono::Duration,
}

impl ThrottleState {
    /// Throttle for `resource`, using the configured window for it.
    pub fn new(state: &AppState, resource: &'static str) -> Self {
        Self {
            limiter: state.limiter.clone(),
            resource,
            window: state.rate_limit.window_for(Some(resource)),
        }
    }
}

/// Throttle middleware.
///
/// Requests without a session pass through; the handler's extractor
/// rejects them. The limiter failing open is logged, not surfaced.
pub async fn throttle_middleware(
    State(throttle): State<ThrottleState>,
    request: Request,
    next: Next,
) -> Response {
    let user_id = request
        .extensions()
        .get::<SessionSnapshot>()
        .map(|s| s.user_id.clone());
    let Some(user_id) = user_id else {
        return next.run(request).await;
    };

    let key = RateLimitKey::user_resource(&user_id, throttle.resource);
    match throttle
        .limiter
        .check_and_record(&key, throttle.window, Timestamp::now())
        .await
    {
        Ok(RateLimitResult::Allowed) => {}
        Ok(RateLimitResult::Denied(denied)) => {
            tracing::info!(key = %key, retry_after_ms = denied.retry_after_ms, "throttled");
            return ApiError(ModerationError::RateLimited {
                retry_after_ms: denied.retry_after_ms,
            })
            .into_response();
        }
        Err(e) => {
            tracing::warn!("Rate limiter unavailable: {}", e);
        }
    }

    next.run(request).await
}

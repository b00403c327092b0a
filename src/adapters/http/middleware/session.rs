//! Session middleware and extractors for axum.
//!
//! This module provides:
//! - `session_middleware` - Loads the bearer token's session, reconciles
//!   it against pending privilege changes and injects it into extensions
//! - `RequireSession` - Extractor for an active (unbanned) session
//! - `RequireStaff` - Extractor for an active moderator or admin session
//! - `OptionalSession` - Extractor for an optional session
//!
//! ```text
//! Request → session_middleware → load → broker.reconcile (patch store, consume)
//!                                      ↓
//!                              Handler → RequireSession reads from extensions
//! ```
//!
//! Reconciliation happens here, before any handler can read the role or
//! ban flag, so handlers never see a snapshot older than the last
//! recorded change.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::domain::moderation::ModerationError;
use crate::domain::session::{SessionSnapshot, SessionToken};

use super::super::error::ApiError;
use super::super::state::AppState;

/// Extracts the token from `Authorization: Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Session middleware.
///
/// 1. No token, or a token the store does not know: continue anonymously;
///    the route's extractor decides whether that is a 401
/// 2. Known token: reconcile through the broker, inject the result
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = bearer_token(request.headers()).and_then(|t| SessionToken::new(t).ok())
    else {
        return next.run(request).await;
    };

    let loaded = match state.sessions.load(&token).await {
        Ok(Some(snapshot)) => snapshot,
        Ok(None) => {
            tracing::debug!(token = %token, "unknown session token");
            return next.run(request).await;
        }
        Err(e) => return ApiError::from(e).into_response(),
    };

    match state.broker.reconcile(&token, loaded).await {
        Ok(Some(snapshot)) => {
            request.extensions_mut().insert(snapshot);
        }
        Ok(None) => tracing::debug!(token = %token, "session removed during request"),
        Err(e) => return ApiError::from(e).into_response(),
    }
    next.run(request).await
}

/// Extractor for an authenticated, unbanned session.
///
/// Rejects with 401 when no session is present and 403 when it is banned.
#[derive(Debug, Clone)]
pub struct RequireSession(pub SessionSnapshot);

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for RequireSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let snapshot = parts
            .extensions
            .get::<SessionSnapshot>()
            .cloned()
            .ok_or(ApiError(ModerationError::AuthenticationRequired))?;

        if snapshot.is_banned {
            return Err(ApiError(ModerationError::denied("account is banned")));
        }
        Ok(RequireSession(snapshot))
    }
}

/// Extractor for an active moderator or admin session.
#[derive(Debug, Clone)]
pub struct RequireStaff(pub SessionSnapshot);

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for RequireStaff
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let RequireSession(snapshot) = RequireSession::from_request_parts(parts, state).await?;
        if !snapshot.is_staff() {
            return Err(ApiError(ModerationError::denied("moderator access required")));
        }
        Ok(RequireStaff(snapshot))
    }
}

/// Extractor for an optional session; never rejects.
#[derive(Debug, Clone)]
pub struct OptionalSession(pub Option<SessionSnapshot>);

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for OptionalSession
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        Ok(OptionalSession(parts.extensions.get::<SessionSnapshot>().cloned()))
    }
}

//! HTTP handlers for private thread endpoints.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::threads::{GetThreadQuery, SendMessageCommand};

use super::super::error::ApiError;
use super::super::middleware::RequireSession;
use super::super::state::AppState;
use super::dto::{MessageView, SendMessageRequest, ThreadView};

/// GET /threads/:id - Participants only
pub async fn get_thread(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
    Path(raw_thread_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let thread = state
        .get_thread_handler()
        .handle(GetThreadQuery {
            requester: session.user_id,
            raw_thread_id,
        })
        .await?;
    Ok(Json(ThreadView::from(&thread)))
}

/// POST /threads/:id/messages - Participants only, throttled per account
pub async fn send_message(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
    Path(raw_thread_id): Path<String>,
    Json(request): Json<SendMessageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .send_message_handler()
        .handle(SendMessageCommand {
            sender: session.user_id,
            raw_thread_id,
            body: request.body,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(MessageView::from(&result.message))))
}

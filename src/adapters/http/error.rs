//! HTTP error mapping for moderation failures.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::DomainError;
use crate::domain::moderation::ModerationError;

/// Standard error response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

/// API error wrapper that converts moderation errors to HTTP responses.
#[derive(Debug)]
pub struct ApiError(pub ModerationError);

impl From<ModerationError> for ApiError {
    fn from(err: ModerationError) -> Self {
        Self(err)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(ModerationError::from(err))
    }
}

impl From<crate::domain::foundation::ValidationError> for ApiError {
    fn from(err: crate::domain::foundation::ValidationError) -> Self {
        Self(ModerationError::from(err))
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ModerationError::AuthenticationRequired => StatusCode::UNAUTHORIZED,
            ModerationError::AuthorizationDenied(_) => StatusCode::FORBIDDEN,
            ModerationError::NotFound(_) => StatusCode::NOT_FOUND,
            ModerationError::InvalidTransition(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ModerationError::StoreConflict(_) => StatusCode::CONFLICT,
            ModerationError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            ModerationError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            ModerationError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.0.code().to_string();

        let body = match &self.0 {
            ModerationError::ValidationFailed { field, .. } => ErrorResponse::with_details(
                code,
                self.0.message(),
                serde_json::json!({ "field": field }),
            ),
            ModerationError::RateLimited { retry_after_ms } => ErrorResponse::with_details(
                code,
                self.0.message(),
                serde_json::json!({ "retry_after_ms": retry_after_ms }),
            ),
            ModerationError::Infrastructure(msg) => {
                tracing::error!(error = %msg, "request failed");
                ErrorResponse::new(code, "Internal server error")
            }
            _ => ErrorResponse::new(code, self.0.message()),
        };

        let mut response = (status, Json(body)).into_response();

        if let ModerationError::RateLimited { retry_after_ms } = self.0 {
            let secs = retry_after_ms.div_ceil(1000).max(1);
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from(secs));
        }

        response
    }
}

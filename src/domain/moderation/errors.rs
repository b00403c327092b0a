//! Moderation and access-control error types.

use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode, TransitionError, ValidationError};

/// Kind of entity a lookup or mutation was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Post,
    Thread,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::User => "User",
            EntityKind::Post => "Post",
            EntityKind::Thread => "Thread",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors raised by moderation handlers, the thread guard and the throttle.
///
/// Validation and authorization failures are final; a `StoreConflict`
/// means the target changed between lookup and write and is not retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModerationError {
    /// No session accompanied the request.
    AuthenticationRequired,
    /// The actor's role does not permit the action on this target.
    AuthorizationDenied(String),
    /// The target does not exist.
    NotFound(EntityKind),
    /// The requested lifecycle change is not allowed.
    InvalidTransition(String),
    /// A conditional mutation matched nothing.
    StoreConflict(EntityKind),
    /// Input failed shape validation.
    ValidationFailed { field: String, message: String },
    /// The principal acted again inside its throttle window.
    RateLimited { retry_after_ms: u64 },
    /// Store or other infrastructure failure.
    Infrastructure(String),
}

impl ModerationError {
    pub fn denied(reason: impl Into<String>) -> Self {
        ModerationError::AuthorizationDenied(reason.into())
    }
    pub fn not_found(kind: EntityKind) -> Self {
        ModerationError::NotFound(kind)
    }
    pub fn invalid_transition(rule: impl Into<String>) -> Self {
        ModerationError::InvalidTransition(rule.into())
    }
    pub fn conflict(kind: EntityKind) -> Self {
        ModerationError::StoreConflict(kind)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ModerationError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ModerationError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            ModerationError::AuthenticationRequired => ErrorCode::Unauthorized,
            ModerationError::AuthorizationDenied(_) => ErrorCode::Forbidden,
            ModerationError::NotFound(EntityKind::User) => ErrorCode::UserNotFound,
            ModerationError::NotFound(EntityKind::Post) => ErrorCode::PostNotFound,
            ModerationError::NotFound(EntityKind::Thread) => ErrorCode::ThreadNotFound,
            ModerationError::InvalidTransition(_) => ErrorCode::InvalidStateTransition,
            ModerationError::StoreConflict(_) => ErrorCode::StoreConflict,
            ModerationError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ModerationError::RateLimited { .. } => ErrorCode::RateLimited,
            ModerationError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            ModerationError::AuthenticationRequired => "Authentication required".to_string(),
            ModerationError::AuthorizationDenied(reason) => format!("Permission denied: {}", reason),
            ModerationError::NotFound(kind) => format!("{} not found", kind),
            ModerationError::InvalidTransition(rule) => format!("Invalid transition: {}", rule),
            ModerationError::StoreConflict(kind) => {
                format!("{} was modified concurrently; nothing was changed", kind)
            }
            ModerationError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ModerationError::RateLimited { retry_after_ms } => {
                format!("Too many requests; retry in {} ms", retry_after_ms)
            }
            ModerationError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl fmt::Display for ModerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ModerationError {}

impl From<DomainError> for ModerationError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::UserNotFound => ModerationError::NotFound(EntityKind::User),
            ErrorCode::PostNotFound => ModerationError::NotFound(EntityKind::Post),
            ErrorCode::ThreadNotFound => ModerationError::NotFound(EntityKind::Thread),
            ErrorCode::Forbidden => ModerationError::AuthorizationDenied(err.message),
            ErrorCode::InvalidStateTransition => ModerationError::InvalidTransition(err.message),
            ErrorCode::ValidationFailed => ModerationError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => ModerationError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ValidationError> for ModerationError {
    fn from(err: ValidationError) -> Self {
        ModerationError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<TransitionError> for ModerationError {
    fn from(err: TransitionError) -> Self {
        ModerationError::InvalidTransition(err.to_string())
    }
}

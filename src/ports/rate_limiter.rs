//! Rate limiting port for throttling repeated actions by one principal.
//!
//! The contract is a per-key minimum interval: an attempt is accepted
//! only if at least `window` has elapsed since the last accepted attempt
//! for the same key. Accepted attempts are stamped whether or not the
//! guarded action later succeeds.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Timestamp, UserId};

/// Port for rate limiting operations.
///
/// Implementations must make check-and-stamp atomic per key.
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Check whether an attempt at `now` is allowed and, if so, stamp it.
    async fn check_and_record(
        &self,
        key: &RateLimitKey,
        window: chrono::Duration,
        now: Timestamp,
    ) -> Result<RateLimitResult, RateLimitError>;

    /// Last accepted attempt for a key, without recording anything.
    async fn last_accepted(&self, key: &RateLimitKey) -> Result<Option<Timestamp>, RateLimitError>;

    /// Forget a key (admin operation).
    async fn reset(&self, key: &RateLimitKey) -> Result<(), RateLimitError>;
}

/// Key identifying what to rate limit.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct RateLimitKey {
    /// The scope of this rate limit.
    pub scope: RateLimitScope,
    /// Identifier within the scope (e.g., IP address, user ID).
    pub identifier: String,
    /// Optional resource for finer-grained limits (e.g., "thread_messages").
    pub resource: Option<String>,
}

/// The scope at which rate limiting is applied.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateLimitScope {
    /// Per-IP address, for unauthenticated callers.
    Ip,
    /// Per-authenticated-user.
    User,
}

impl RateLimitKey {
    pub fn ip(ip: &str) -> Self {
        Self {
            scope: RateLimitScope::Ip,
            identifier: ip.to_string(),
            resource: None,
        }
    }

    pub fn user(user_id: &UserId) -> Self {
        Self {
            scope: RateLimitScope::User,
            identifier: user_id.to_string(),
            resource: None,
        }
    }

    pub fn user_resource(user_id: &UserId, resource: &str) -> Self {
        Self {
            scope: RateLimitScope::User,
            identifier: user_id.to_string(),
            resource: Some(resource.to_string()),
        }
    }
}

impl fmt::Display for RateLimitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.resource {
            Some(resource) => write!(f, "{}:{}:{}", self.scope, self.identifier, resource),
            None => write!(f, "{}:{}", self.scope, self.identifier),
        }
    }
}

impl RateLimitScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            RateLimitScope::Ip => "ip",
            RateLimitScope::User => "user",
        }
    }
}

impl fmt::Display for RateLimitScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of a rate limit check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateLimitResult {
    /// Attempt accepted and stamped.
    Allowed,
    /// Attempt refused; nothing was recorded.
    Denied(RateLimitDenied),
}

impl RateLimitResult {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RateLimitResult::Allowed)
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, RateLimitResult::Denied(_))
    }
}

/// Details of a rate limit denial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitDenied {
    /// Milliseconds until the next attempt would be accepted.
    pub retry_after_ms: u64,
    /// The scope that triggered the denial.
    pub scope: RateLimitScope,
}

impl RateLimitDenied {
    /// Whole seconds for a `Retry-After` header, rounded up, at least 1.
    pub fn retry_after_secs(&self) -> u64 {
        self.retry_after_ms.div_ceil(1000).max(1)
    }
}

/// Errors that can occur during rate limiting operations.
#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    /// Rate limiter backend is unavailable.
    #[error("rate limiter unavailable: {0}")]
    Unavailable(String),

    /// Window was zero or negative.
    #[error("invalid window: {0} ms")]
    InvalidWindow(i64),
}

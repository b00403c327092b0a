//! In-memory rate limiter.
//!
//! Keeps the last accepted timestamp per key. Entries are never evicted
//! except through [`RateLimiter::reset`], so memory grows with the number
//! of distinct principals seen by the process.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::Timestamp;
use crate::ports::{RateLimitDenied, RateLimitError, RateLimitKey, RateLimitResult, RateLimiter};

/// Minimum-interval limiter for single-process deployments.
///
/// The write lock is held across the whole check-and-stamp, so two
/// concurrent attempts for one key can never both be accepted.
#[derive(Debug, Clone, Default)]
pub struct FixedWindowRateLimiter {
    last_seen: Arc<RwLock<HashMap<RateLimitKey, Timestamp>>>,
}

impl FixedWindowRateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently tracked.
    pub async fn tracked_keys(&self) -> usize {
        self.last_seen.read().await.len()
    }
}

#[async_trait]
impl RateLimiter for FixedWindowRateLimiter {
    async fn check_and_record(
        &self,
        key: &RateLimitKey,
        window: chrono::Duration,
        now: Timestamp,
    ) -> Result<RateLimitResult, RateLimitError> {
        if window <= chrono::Duration::zero() {
            return Err(RateLimitError::InvalidWindow(window.num_milliseconds()));
        }

        let mut last_seen = self.last_seen.write().await;

        if let Some(last) = last_seen.get(key) {
            let elapsed = now.duration_since(last);
            if elapsed < window {
                let remaining = (window - elapsed).num_milliseconds();
                tracing::debug!(key = %key, retry_after_ms = remaining, "rate limited");
                return Ok(RateLimitResult::Denied(RateLimitDenied {
                    retry_after_ms: u64::try_from(remaining).unwrap_or(u64::MAX),
                    scope: key.scope,
                }));
            }
        }

        last_seen.insert(key.clone(), now);
        Ok(RateLimitResult::Allowed)
    }

    async fn last_accepted(&self, key: &RateLimitKey) -> Result<Option<Timestamp>, RateLimitError> {
        Ok(self.last_seen.read().await.get(key).copied())
    }

    async fn reset(&self, key: &RateLimitKey) -> Result<(), RateLimitError> {
        self.last_seen.write().await.remove(key);
        Ok(())
    }
}

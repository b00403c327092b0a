//! Rate limit configuration types.
//!
//! One default interval applies to every throttled action; individual
//! resources may override it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default minimum interval between accepted attempts.
pub const DEFAULT_WINDOW_MS: u64 = 5_000;

/// Complete rate limit configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Interval applied when a resource has no override.
    #[serde(default = "default_window_ms")]
    pub default_window_ms: u64,
    /// Per-resource interval overrides, keyed by resource name.
    #[serde(default)]
    pub resources: HashMap<String, u64>,
}

fn default_window_ms() -> u64 {
    DEFAULT_WINDOW_MS
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            default_window_ms: DEFAULT_WINDOW_MS,
            resources: HashMap::new(),
        }
    }
}

impl RateLimitConfig {
    /// Set an override for one resource.
    pub fn with_resource(mut self, resource: impl Into<String>, window_ms: u64) -> Self {
        self.resources.insert(resource.into(), window_ms);
        self
    }

    /// Interval for a resource, falling back to the default.
    pub fn window_for(&self, resource: Option<&str>) -> chrono::Duration {
        let ms = resource
            .and_then(|r| self.resources.get(r).copied())
            .unwrap_or(self.default_window_ms);
        chrono::Duration::milliseconds(i64::try_from(ms).unwrap_or(i64::MAX))
    }
}

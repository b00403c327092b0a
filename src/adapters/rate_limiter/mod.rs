//! Rate limiter adapters.
//!
//! ## Available Adapters
//!
//! - `FixedWindowRateLimiter` - In-memory, single process
//!
//! ## Usage
//!
//! ```ignore
//! use forum_moderation::adapters::rate_limiter::{FixedWindowRateLimiter, RateLimitConfig};
//!
//! let config = RateLimitConfig::default();
//! let limiter = FixedWindowRateLimiter::new();
//! let result = limiter
//!     .check_and_record(&key, config.window_for(Some("thread_messages")), Timestamp::now())
//!     .await?;
//! ```

mod config;
mod in_memory;

pub use self::config::{RateLimitConfig, DEFAULT_WINDOW_MS};
pub use in_memory::FixedWindowRateLimiter;

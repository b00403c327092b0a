//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Store Ports
//!
//! - `UserRepository` - Accounts, with conditional updates
//! - `PostRepository` - Post flags, reported queue, deletion
//! - `ThreadRepository` - Private threads and their messages
//! - `SessionStore` - Issued session snapshots by bearer token
//!
//! ## Coordination Ports
//!
//! - `SessionUpdateNotifier` - Announces privilege changes to live sessions
//! - `RateLimiter` - Per-principal minimum interval between actions

mod post_repository;
mod rate_limiter;
mod session_store;
mod session_update_notifier;
mod thread_repository;
mod update_outcome;
mod user_repository;

pub use post_repository::PostRepository;
pub use rate_limiter::{
    RateLimitDenied, RateLimitError, RateLimitKey, RateLimitResult, RateLimitScope, RateLimiter,
};
pub use session_store::SessionStore;
pub use session_update_notifier::SessionUpdateNotifier;
pub use thread_repository::ThreadRepository;
pub use update_outcome::UpdateOutcome;
pub use user_repository::{UserMatch, UserRepository};

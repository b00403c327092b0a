//! HTTP middleware for axum.
//!
//! - `session` - Session loading, reconciliation and extractors
//! - `rate_limit` - Per-principal throttling of write routes

pub mod rate_limit;
pub mod session;

pub use rate_limit::{throttle_middleware, ThrottleState};
pub use session::{
    bearer_token, session_middleware, OptionalSession, RequireSession, RequireStaff,
};

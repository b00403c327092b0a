//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - In-memory stores (users, posts, threads, sessions)
//! - `rate_limiter` - Rate limiter implementations
//! - `http` - axum router, middleware and endpoint handlers

pub mod http;
pub mod memory;
pub mod rate_limiter;

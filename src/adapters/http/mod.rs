//! HTTP adapters - REST API implementations.
//!
//! Each area has its own submodule for endpoint exposure; `router`
//! assembles them behind the session and tracing layers.

pub mod error;
pub mod middleware;
pub mod moderation;
mod router;
mod state;
pub mod threads;

pub use error::{ApiError, ErrorResponse};
pub use router::build_router;
pub use state::AppState;

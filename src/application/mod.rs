//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;
mod session_broker;
mod thread_access;

pub use session_broker::SessionStateBroker;
pub use thread_access::ThreadAccessGuard;

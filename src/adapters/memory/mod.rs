//! In-memory store adapters.
//!
//! Each adapter keeps its records behind a `tokio::sync::RwLock` and
//! performs every conditional mutation under a single write guard, so
//! read-compare-write is atomic with respect to other callers.

mod post_repository;
mod session_store;
mod thread_repository;
mod user_repository;

pub use post_repository::InMemoryPostRepository;
pub use session_store::InMemorySessionStore;
pub use thread_repository::InMemoryThreadRepository;
pub use user_repository::InMemoryUserRepository;

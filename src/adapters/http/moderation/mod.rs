//! HTTP adapter for moderation endpoints.

pub mod dto;
mod handlers;
mod routes;

pub use routes::{moderator_routes, post_routes, POST_REPORTS};

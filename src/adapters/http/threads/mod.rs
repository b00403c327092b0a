//! HTTP adapter for private threads.

pub mod dto;
mod handlers;
mod routes;

pub use routes::{thread_routes, THREAD_MESSAGES};

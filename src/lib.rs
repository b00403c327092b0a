//! Forum Moderation - role-based moderation for a community forum
//!
//! Decides whether an actor may ban, unban, re-role or moderate content,
//! applies those changes with conditional writes, and carries the
//! resulting privilege changes into sessions that were issued before the
//! change. Private threads are confined to their participants and write
//! actions are throttled per account.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

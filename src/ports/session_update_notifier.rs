//! Port through which moderation announces privilege changes.
//!
//! Moderation handlers call this after a successful store mutation so
//! already-issued sessions of the target pick up the change on their
//! next request.

use async_trait::async_trait;

use crate::domain::foundation::UserId;
use crate::domain::moderation::Role;

#[async_trait]
pub trait SessionUpdateNotifier: Send + Sync {
    /// Record that `target` now has `role`. Last write wins.
    async fn record_role_change(&self, target: &UserId, role: Role);

    /// Record that `target`'s ban status is now `is_banned`. Last write wins.
    async fn record_banned_change(&self, target: &UserId, is_banned: bool);
}

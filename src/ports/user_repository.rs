//! User repository port.
//!
//! The authoritative store of account privileges. Moderation writes go
//! through [`UserRepository::update_where`], a single conditional
//! operation, so a role change that lands between a handler's read and
//! its write makes the write match nothing instead of overwriting it.
//!
//! # Example
//!
//! ```ignore
//! let outcome = repo
//!     .update_where(
//!         &UserMatch::with_role(target.id().clone(), target.role()),
//!         &UserPatch::Ban { at: Timestamp::now(), by: actor.id.clone() },
//!     )
//!     .await?;
//! if !outcome.is_match() {
//!     return Err(ModerationError::conflict(EntityKind::User));
//! }
//! ```

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::moderation::{Role, User, UserPatch};

use super::UpdateOutcome;

/// Match conditions for a conditional user update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMatch {
    pub id: UserId,
    /// When set, the record's role must still equal this value.
    pub role: Option<Role>,
}

impl UserMatch {
    pub fn by_id(id: UserId) -> Self {
        Self { id, role: None }
    }

    pub fn with_role(id: UserId, role: Role) -> Self {
        Self {
            id,
            role: Some(role),
        }
    }

    pub fn matches(&self, user: &User) -> bool {
        user.id() == &self.id && self.role.map_or(true, |r| r == user.role())
    }
}

/// Repository port for forum accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// All users whose role is one of `roles`, ordered by id.
    async fn find_by_roles(&self, roles: &[Role]) -> Result<Vec<User>, DomainError>;

    /// Insert or replace a user.
    async fn save(&self, user: &User) -> Result<(), DomainError>;

    /// Apply `patch` to the record matching `criteria`, atomically.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure. A non-matching record is
    ///   not an error; it is reported through `UpdateOutcome::matched`.
    async fn update_where(
        &self,
        criteria: &UserMatch,
        patch: &UserPatch,
    ) -> Result<UpdateOutcome, DomainError>;
}

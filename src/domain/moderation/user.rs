//! Forum account as seen by the moderation subsystem.
//!
//! The persisted `User` is the authoritative copy of an account's
//! privileges. Issued sessions carry their own cached copy, which the
//! session broker patches after a change lands here.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};

use super::Role;

/// Persisted forum account.
///
/// # Invariants
///
/// - `banned_at` / `banned_by` are present iff `is_banned`
/// - an admin is never banned (upheld by the moderation policy, not here)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: String,
    role: Role,
    is_banned: bool,
    banned_at: Option<Timestamp>,
    banned_by: Option<UserId>,
    role_updated_at: Option<Timestamp>,
    role_updated_by: Option<UserId>,
    created_at: Timestamp,
}

/// A single moderation mutation applied atomically by the user store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserPatch {
    /// Mark banned and stamp who did it.
    Ban { at: Timestamp, by: UserId },
    /// Clear the ban and its audit fields.
    Unban,
    /// Change role and stamp who did it.
    ChangeRole {
        role: Role,
        at: Timestamp,
        by: UserId,
    },
}

impl User {
    /// Creates a new, unbanned account.
    pub fn new(id: UserId, username: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            username: username.into(),
            role,
            is_banned: false,
            banned_at: None,
            banned_by: None,
            role_updated_at: None,
            role_updated_by: None,
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitute a user from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: UserId,
        username: String,
        role: Role,
        is_banned: bool,
        banned_at: Option<Timestamp>,
        banned_by: Option<UserId>,
        role_updated_at: Option<Timestamp>,
        role_updated_by: Option<UserId>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            username,
            role,
            is_banned,
            banned_at,
            banned_by,
            role_updated_at,
            role_updated_by,
            created_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_banned(&self) -> bool {
        self.is_banned
    }

    pub fn banned_at(&self) -> Option<&Timestamp> {
        self.banned_at.as_ref()
    }

    pub fn banned_by(&self) -> Option<&UserId> {
        self.banned_by.as_ref()
    }

    pub fn role_updated_at(&self) -> Option<&Timestamp> {
        self.role_updated_at.as_ref()
    }

    pub fn role_updated_by(&self) -> Option<&UserId> {
        self.role_updated_by.as_ref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Applies a moderation patch in place.
    ///
    /// Returns true if any field changed.
    pub fn apply(&mut self, patch: &UserPatch) -> bool {
        let before = self.clone();
        match patch {
            UserPatch::Ban { at, by } => {
                self.is_banned = true;
                self.banned_at = Some(*at);
                self.banned_by = Some(by.clone());
            }
            UserPatch::Unban => {
                self.is_banned = false;
                self.banned_at = None;
                self.banned_by = None;
            }
            UserPatch::ChangeRole { role, at, by } => {
                self.role = *role;
                self.role_updated_at = Some(*at);
                self.role_updated_by = Some(by.clone());
            }
        }
        *self != before
    }
}

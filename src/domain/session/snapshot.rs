use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;
use crate::domain::moderation::{Actor, Role};

use super::Reconciliation;

/// Cached identity and privilege state carried by an issued session.
///
/// May lag the persisted `User` until the next reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub user_id: UserId,
    pub role: Role,
    pub is_banned: bool,
}

impl SessionSnapshot {
    /// Creates a snapshot for a freshly authenticated, unbanned account.
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self {
            user_id,
            role,
            is_banned: false,
        }
    }

    /// The principal this session acts as.
    pub fn actor(&self) -> Actor {
        Actor::new(self.user_id.clone(), self.role)
    }

    pub fn is_staff(&self) -> bool {
        self.role.is_staff()
    }

    /// Writes reconciled values into the cached fields.
    pub fn apply(&mut self, reconciliation: &Reconciliation) {
        if let Some(role) = reconciliation.role {
            self.role = role;
        }
        if let Some(banned) = reconciliation.banned {
            self.is_banned = banned;
        }
    }
}

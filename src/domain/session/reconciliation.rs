use crate::domain::moderation::Role;

/// What a reconciliation pass changed on a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reconciliation {
    pub role: Option<Role>,
    pub banned: Option<bool>,
}

impl Reconciliation {
    /// True when no pending update was found.
    pub fn is_empty(&self) -> bool {
        self.role.is_none() && self.banned.is_none()
    }
}

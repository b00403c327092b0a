//! Forum role definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Privilege level of a forum account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular member.
    User,

    /// Can review reported content and ban regular members.
    Moderator,

    /// Full control; can never be banned or have their role changed.
    Admin,
}

impl Role {
    /// Every role, lowest privilege first.
    pub const ALL: [Role; 3] = [Role::User, Role::Moderator, Role::Admin];

    /// Returns the wire name of this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Moderator => "moderator",
            Role::Admin => "admin",
        }
    }

    /// Returns true for moderators and admins.
    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Moderator | Role::Admin)
    }

    /// Returns true if an admin may assign this role to someone.
    ///
    /// Only user and moderator are assignable; admin is never granted
    /// through the moderation interface.
    pub fn is_assignable(&self) -> bool {
        matches!(self, Role::User | Role::Moderator)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "moderator" => Ok(Role::Moderator),
            "admin" => Ok(Role::Admin),
            other => Err(ValidationError::invalid_format(
                "role",
                format!("unknown role '{}'", other),
            )),
        }
    }
}

//! Declarative moderation policy.
//!
//! Authorization is decided by two tables rather than nested conditionals:
//!
//! 1. [`ACTOR_TABLE`] - which roles may attempt an action at all.
//! 2. [`TARGET_RULES`] - ordered deny rules keyed by
//!    `(actor role, target role, action)`; `None` in the actor column
//!    matches every actor.
//!
//! Evaluation order is fixed and the first failing rule wins:
//! actor table, then target rules in declaration order, then the
//! self-targeting guard. Anything not denied is allowed.

use crate::domain::foundation::UserId;

use super::{ModerationError, Role};

/// Something an actor can attempt through the moderation interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModerationAction {
    BanUser,
    UnbanUser,
    ChangeRole,
    /// Clear reports, mark fulfilled, delete posts, read the queue.
    ModerateContent,
    /// List bannable accounts.
    ViewUsers,
    /// Flag a post for review.
    ReportContent,
}

impl ModerationAction {
    pub const ALL: [ModerationAction; 6] = [
        ModerationAction::BanUser,
        ModerationAction::UnbanUser,
        ModerationAction::ChangeRole,
        ModerationAction::ModerateContent,
        ModerationAction::ViewUsers,
        ModerationAction::ReportContent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModerationAction::BanUser => "ban_user",
            ModerationAction::UnbanUser => "unban_user",
            ModerationAction::ChangeRole => "change_role",
            ModerationAction::ModerateContent => "moderate_content",
            ModerationAction::ViewUsers => "view_users",
            ModerationAction::ReportContent => "report_content",
        }
    }

    /// Returns true if the action is aimed at another account.
    pub fn targets_user(&self) -> bool {
        matches!(
            self,
            ModerationAction::BanUser | ModerationAction::UnbanUser | ModerationAction::ChangeRole
        )
    }
}

/// Why a policy evaluation denied the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DenyReason {
    InsufficientRole,
    TargetIsAdmin,
    PeerModerator,
    AdminImmutable,
    SelfTarget,
}

impl DenyReason {
    pub fn message(&self) -> &'static str {
        match self {
            DenyReason::InsufficientRole => "your role does not permit this action",
            DenyReason::TargetIsAdmin => "admins cannot be banned",
            DenyReason::PeerModerator => "moderators cannot ban other moderators",
            DenyReason::AdminImmutable => "an admin's role cannot be changed",
            DenyReason::SelfTarget => "cannot moderate own account",
        }
    }
}

/// Outcome of a policy evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyDecision {
    Allow,
    Deny(DenyReason),
}

impl PolicyDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, PolicyDecision::Allow)
    }

    /// Converts to `Ok(())` or `AuthorizationDenied`.
    pub fn into_result(self) -> Result<(), ModerationError> {
        match self {
            PolicyDecision::Allow => Ok(()),
            PolicyDecision::Deny(reason) => Err(ModerationError::denied(reason.message())),
        }
    }
}

/// The principal performing an action, as read from its session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: UserId,
    pub role: Role,
}

impl Actor {
    pub fn new(id: UserId, role: Role) -> Self {
        Self { id, role }
    }
}

/// The account an action is aimed at, as currently persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetAccount<'a> {
    pub id: &'a UserId,
    pub role: Role,
}

/// A deny rule in the target table.
#[derive(Debug, Clone, Copy)]
pub struct TargetRule {
    pub actor: Option<Role>,
    pub target: Role,
    pub action: ModerationAction,
    pub reason: DenyReason,
}

/// Roles allowed to attempt each action.
pub const ACTOR_TABLE: &[(ModerationAction, &[Role])] = &[
    (ModerationAction::BanUser, &[Role::Moderator, Role::Admin]),
    (ModerationAction::UnbanUser, &[Role::Admin]),
    (ModerationAction::ChangeRole, &[Role::Admin]),
    (ModerationAction::ModerateContent, &[Role::Moderator, Role::Admin]),
    (ModerationAction::ViewUsers, &[Role::Moderator, Role::Admin]),
    (
        ModerationAction::ReportContent,
        &[Role::User, Role::Moderator, Role::Admin],
    ),
];

/// Ordered deny rules over the target's role.
pub const TARGET_RULES: &[TargetRule] = &[
    TargetRule {
        actor: None,
        target: Role::Admin,
        action: ModerationAction::BanUser,
        reason: DenyReason::TargetIsAdmin,
    },
    TargetRule {
        actor: Some(Role::Moderator),
        target: Role::Moderator,
        action: ModerationAction::BanUser,
        reason: DenyReason::PeerModerator,
    },
    TargetRule {
        actor: None,
        target: Role::Admin,
        action: ModerationAction::ChangeRole,
        reason: DenyReason::AdminImmutable,
    },
];

/// Stateless evaluator over [`ACTOR_TABLE`] and [`TARGET_RULES`].
pub struct ModerationPolicy;

impl ModerationPolicy {
    /// Checks only whether the actor's role may attempt the action.
    pub fn authorize_actor(actor_role: Role, action: ModerationAction) -> PolicyDecision {
        let allowed = ACTOR_TABLE
            .iter()
            .find(|(a, _)| *a == action)
            .map(|(_, roles)| roles.contains(&actor_role))
            .unwrap_or(false);

        if allowed {
            PolicyDecision::Allow
        } else {
            PolicyDecision::Deny(DenyReason::InsufficientRole)
        }
    }

    /// Full evaluation against a target account.
    pub fn authorize(
        actor: &Actor,
        target: &TargetAccount<'_>,
        action: ModerationAction,
    ) -> PolicyDecision {
        if let PolicyDecision::Deny(reason) = Self::decide_roles(actor.role, target.role, action) {
            return PolicyDecision::Deny(reason);
        }

        if action.targets_user() && &actor.id == target.id {
            return PolicyDecision::Deny(DenyReason::SelfTarget);
        }

        PolicyDecision::Allow
    }

    /// Evaluates the role-only part of the policy (no identities).
    pub fn decide_roles(actor: Role, target: Role, action: ModerationAction) -> PolicyDecision {
        if let PolicyDecision::Deny(reason) = Self::authorize_actor(actor, action) {
            return PolicyDecision::Deny(reason);
        }

        TARGET_RULES
            .iter()
            .find(|rule| {
                rule.action == action
                    && rule.target == target
                    && rule.actor.map_or(true, |r| r == actor)
            })
            .map(|rule| PolicyDecision::Deny(rule.reason))
            .unwrap_or(PolicyDecision::Allow)
    }

    /// Enumerates the full role x role x action decision table.
    pub fn enumerate() -> Vec<(Role, Role, ModerationAction, PolicyDecision)> {
        let mut rows = Vec::with_capacity(Role::ALL.len() * Role::ALL.len() * ModerationAction::ALL.len());
        for actor in Role::ALL {
            for target in Role::ALL {
                for action in ModerationAction::ALL {
                    rows.push((actor, target, action, Self::decide_roles(actor, target, action)));
                }
            }
        }
        rows
    }
}

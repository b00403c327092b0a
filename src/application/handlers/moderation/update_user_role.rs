//! UpdateUserRoleHandler - Command handler for changing an account's role.

use std::sync::Arc;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::moderation::{
    Actor, EntityKind, ModerationAction, ModerationError, ModerationPolicy, Role, TargetAccount,
    User, UserPatch,
};
use crate::ports::{SessionUpdateNotifier, UserMatch, UserRepository};

/// Command to change an account's role.
#[derive(Debug, Clone)]
pub struct UpdateUserRoleCommand {
    pub actor: Actor,
    pub target_id: UserId,
    pub new_role: Role,
}

#[derive(Debug, Clone)]
pub struct UpdateUserRoleResult {
    pub user: User,
    pub previous_role: Role,
}

/// Handler for role changes.
///
/// Only admins may change roles, only to `user` or `moderator`, and
/// never on another admin.
pub struct UpdateUserRoleHandler {
    users: Arc<dyn UserRepository>,
    notifier: Arc<dyn SessionUpdateNotifier>,
}

impl UpdateUserRoleHandler {
    pub fn new(users: Arc<dyn UserRepository>, notifier: Arc<dyn SessionUpdateNotifier>) -> Self {
        Self { users, notifier }
    }

    pub async fn handle(
        &self,
        cmd: UpdateUserRoleCommand,
    ) -> Result<UpdateUserRoleResult, ModerationError> {
        // 1. Admin only
        ModerationPolicy::authorize_actor(cmd.actor.role, ModerationAction::ChangeRole)
            .into_result()?;

        // 2. Admin is never granted here
        if !cmd.new_role.is_assignable() {
            return Err(ModerationError::invalid_transition(format!(
                "role '{}' cannot be assigned",
                cmd.new_role
            )));
        }

        // 3. Load target
        let mut target = self
            .users
            .find_by_id(&cmd.target_id)
            .await?
            .ok_or(ModerationError::not_found(EntityKind::User))?;
        let previous_role = target.role();

        // 4. Target rules
        ModerationPolicy::authorize(
            &cmd.actor,
            &TargetAccount {
                id: target.id(),
                role: previous_role,
            },
            ModerationAction::ChangeRole,
        )
        .into_result()?;

        // 5. Conditional write
        let patch = UserPatch::ChangeRole {
            role: cmd.new_role,
            at: Timestamp::now(),
            by: cmd.actor.id.clone(),
        };
        let outcome = self
            .users
            .update_where(&UserMatch::with_role(target.id().clone(), previous_role), &patch)
            .await?;
        if !outcome.is_match() {
            tracing::warn!(actor = %cmd.actor.id, target = %target.id(), "role change lost a race");
            return Err(ModerationError::conflict(EntityKind::User));
        }

        // 6. Propagate
        self.notifier.record_role_change(target.id(), cmd.new_role).await;

        target.apply(&patch);
        tracing::info!(
            actor = %cmd.actor.id,
            target = %target.id(),
            from = %previous_role,
            to = %cmd.new_role,
            "user role changed"
        );
        Ok(UpdateUserRoleResult {
            user: target,
            previous_role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    fn cmd(actor_id: &str, role: Role, target: &str, new_role: Role) -> UpdateUserRoleCommand {
        UpdateUserRoleCommand {
            actor: actor(actor_id, role),
            target_id: uid(target),
            new_role,
        }
    }

    #[tokio::test]
    async fn admin_promotes_user_to_moderator() {
        let users = Arc::new(forum_users());
        let notes = notifier();
        let h = UpdateUserRoleHandler::new(users.clone(), notes.clone());

        let result = h
            .handle(cmd("ada", Role::Admin, "alice", Role::Moderator))
            .await
            .unwrap();

        assert_eq!(result.previous_role, Role::User);
        let stored = users.find_by_id(&uid("alice")).await.unwrap().unwrap();
        assert_eq!(stored.role(), Role::Moderator);
        assert_eq!(stored.role_updated_by(), Some(&uid("ada")));
        assert!(stored.role_updated_at().is_some());
        assert_eq!(
            notes.notifications(),
            vec![Notification::Role(uid("alice"), Role::Moderator)]
        );
    }

    #[tokio::test]
    async fn admin_demotes_moderator() {
        let users = Arc::new(forum_users());
        let h = UpdateUserRoleHandler::new(users.clone(), notifier());

        h.handle(cmd("ada", Role::Admin, "mia", Role::User)).await.unwrap();

        assert_eq!(
            users.find_by_id(&uid("mia")).await.unwrap().unwrap().role(),
            Role::User
        );
    }

    #[tokio::test]
    async fn promotion_to_admin_is_invalid_transition() {
        let users = Arc::new(forum_users());
        let notes = notifier();
        let h = UpdateUserRoleHandler::new(users.clone(), notes.clone());

        let err = h
            .handle(cmd("ada", Role::Admin, "alice", Role::Admin))
            .await
            .unwrap_err();

        assert!(matches!(err, ModerationError::InvalidTransition(_)));
        assert_eq!(
            users.find_by_id(&uid("alice")).await.unwrap().unwrap().role(),
            Role::User
        );
        assert!(notes.notifications().is_empty());
    }

    #[tokio::test]
    async fn moderator_cannot_change_roles() {
        let h = UpdateUserRoleHandler::new(Arc::new(forum_users()), notifier());
        let err = h
            .handle(cmd("mia", Role::Moderator, "alice", Role::Moderator))
            .await
            .unwrap_err();
        assert!(matches!(err, ModerationError::AuthorizationDenied(_)));
    }

    #[tokio::test]
    async fn actor_check_precedes_role_check() {
        let h = UpdateUserRoleHandler::new(Arc::new(forum_users()), notifier());
        let err = h
            .handle(cmd("mia", Role::Moderator, "alice", Role::Admin))
            .await
            .unwrap_err();
        assert!(matches!(err, ModerationError::AuthorizationDenied(_)));
    }

    #[tokio::test]
    async fn another_admins_role_is_immutable() {
        let h = UpdateUserRoleHandler::new(Arc::new(forum_users()), notifier());
        let err = h
            .handle(cmd("ada", Role::Admin, "alan", Role::User))
            .await
            .unwrap_err();
        assert_eq!(err, ModerationError::denied("an admin's role cannot be changed"));
    }

    #[tokio::test]
    async fn unknown_target_is_not_found() {
        let h = UpdateUserRoleHandler::new(Arc::new(forum_users()), notifier());
        let err = h
            .handle(cmd("ada", Role::Admin, "ghost", Role::User))
            .await
            .unwrap_err();
        assert_eq!(err, ModerationError::NotFound(EntityKind::User));
    }

    #[tokio::test]
    async fn concurrent_role_change_is_a_conflict() {
        let users = Arc::new(RacingUserRepository::new(forum_users(), Role::Moderator));
        let notes = notifier();
        let h = UpdateUserRoleHandler::new(users.clone(), notes.clone());

        let err = h
            .handle(cmd("ada", Role::Admin, "alice", Role::User))
            .await
            .unwrap_err();

        assert_eq!(err, ModerationError::StoreConflict(EntityKind::User));
        assert_eq!(
            users.find_by_id(&uid("alice")).await.unwrap().unwrap().role(),
            Role::Moderator
        );
        assert!(notes.notifications().is_empty());
    }
}

//! UnbanUserHandler - Command handler for lifting a ban. Admin only.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::moderation::{
    Actor, EntityKind, ModerationAction, ModerationError, ModerationPolicy, TargetAccount, User,
    UserPatch,
};
use crate::ports::{SessionUpdateNotifier, UserMatch, UserRepository};

#[derive(Debug, Clone)]
pub struct UnbanUserCommand {
    pub actor: Actor,
    pub target_id: UserId,
}

#[derive(Debug, Clone)]
pub struct UnbanUserResult {
    pub user: User,
}

pub struct UnbanUserHandler {
    users: Arc<dyn UserRepository>,
    notifier: Arc<dyn SessionUpdateNotifier>,
}

impl UnbanUserHandler {
    pub fn new(users: Arc<dyn UserRepository>, notifier: Arc<dyn SessionUpdateNotifier>) -> Self {
        Self { users, notifier }
    }

    pub async fn handle(&self, cmd: UnbanUserCommand) -> Result<UnbanUserResult, ModerationError> {
        ModerationPolicy::authorize_actor(cmd.actor.role, ModerationAction::UnbanUser)
            .into_result()?;

        let mut target = self
            .users
            .find_by_id(&cmd.target_id)
            .await?
            .ok_or(ModerationError::not_found(EntityKind::User))?;

        ModerationPolicy::authorize(
            &cmd.actor,
            &TargetAccount {
                id: target.id(),
                role: target.role(),
            },
            ModerationAction::UnbanUser,
        )
        .into_result()?;

        let patch = UserPatch::Unban;
        let outcome = self
            .users
            .update_where(&UserMatch::with_role(target.id().clone(), target.role()), &patch)
            .await?;
        if !outcome.is_match() {
            return Err(ModerationError::conflict(EntityKind::User));
        }

        self.notifier.record_banned_change(target.id(), false).await;

        target.apply(&patch);
        tracing::info!(actor = %cmd.actor.id, target = %target.id(), "user unbanned");
        Ok(UnbanUserResult { user: target })
    }
}

//! BanUserHandler - Command handler for banning an account.

use std::sync::Arc;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::moderation::{
    Actor, EntityKind, ModerationAction, ModerationError, ModerationPolicy, TargetAccount, User,
    UserPatch,
};
use crate::ports::{SessionUpdateNotifier, UserMatch, UserRepository};

/// Command to ban an account.
#[derive(Debug, Clone)]
pub struct BanUserCommand {
    pub actor: Actor,
    pub target_id: UserId,
}

/// Result of a successful ban.
#[derive(Debug, Clone)]
pub struct BanUserResult {
    pub user: User,
}

/// Handler for banning accounts.
///
/// Moderators may ban users; admins may ban users and moderators.
/// Admins can never be banned.
pub struct BanUserHandler {
    users: Arc<dyn UserRepository>,
    notifier: Arc<dyn SessionUpdateNotifier>,
}

impl BanUserHandler {
    pub fn new(users: Arc<dyn UserRepository>, notifier: Arc<dyn SessionUpdateNotifier>) -> Self {
        Self { users, notifier }
    }

    pub async fn handle(&self, cmd: BanUserCommand) -> Result<BanUserResult, ModerationError> {
        // 1. Actor must be staff
        ModerationPolicy::authorize_actor(cmd.actor.role, ModerationAction::BanUser)
            .into_result()?;

        // 2. Load target
        let mut target = self
            .users
            .find_by_id(&cmd.target_id)
            .await?
            .ok_or(ModerationError::not_found(EntityKind::User))?;

        // 3. Target rules
        ModerationPolicy::authorize(
            &cmd.actor,
            &TargetAccount {
                id: target.id(),
                role: target.role(),
            },
            ModerationAction::BanUser,
        )
        .into_result()?;

        // 4. Conditional write against the role we authorized on
        let patch = UserPatch::Ban {
            at: Timestamp::now(),
            by: cmd.actor.id.clone(),
        };
        let outcome = self
            .users
            .update_where(&UserMatch::with_role(target.id().clone(), target.role()), &patch)
            .await?;
        if !outcome.is_match() {
            tracing::warn!(actor = %cmd.actor.id, target = %target.id(), "ban lost a race");
            return Err(ModerationError::conflict(EntityKind::User));
        }

        // 5. Propagate to live sessions
        self.notifier.record_banned_change(target.id(), true).await;

        target.apply(&patch);
        tracing::info!(actor = %cmd.actor.id, target = %target.id(), "user banned");
        Ok(BanUserResult { user: target })
    }
}

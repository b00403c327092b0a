//! GetBannableUsersHandler - Query handler for the moderator user list.

use std::sync::Arc;

use crate::domain::moderation::{
    Actor, ModerationAction, ModerationError, ModerationPolicy, Role, User,
};
use crate::ports::UserRepository;

/// Roles that ever appear in the bannable list.
const BANNABLE_ROLES: [Role; 2] = [Role::User, Role::Moderator];

#[derive(Debug, Clone)]
pub struct GetBannableUsersQuery {
    pub actor: Actor,
}

#[derive(Debug, Clone)]
pub struct GetBannableUsersResult {
    pub users: Vec<User>,
}

/// Lists every non-admin account, banned or not.
pub struct GetBannableUsersHandler {
    users: Arc<dyn UserRepository>,
}

impl GetBannableUsersHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(
        &self,
        query: GetBannableUsersQuery,
    ) -> Result<GetBannableUsersResult, ModerationError> {
        ModerationPolicy::authorize_actor(query.actor.role, ModerationAction::ViewUsers)
            .into_result()?;

        let users = self.users.find_by_roles(&BANNABLE_ROLES).await?;
        Ok(GetBannableUsersResult { users })
    }
}

//! DeletePostHandler - Command handler for irreversible post removal.

use std::sync::Arc;

use crate::domain::foundation::{PostId, StateMachine};
use crate::domain::moderation::{
    Actor, EntityKind, ModerationAction, ModerationError, ModerationPolicy, PostModerationState,
};
use crate::ports::PostRepository;

#[derive(Debug, Clone)]
pub struct DeletePostCommand {
    pub actor: Actor,
    pub post_id: PostId,
}

pub struct DeletePostHandler {
    posts: Arc<dyn PostRepository>,
}

impl DeletePostHandler {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    pub async fn handle(&self, cmd: DeletePostCommand) -> Result<(), ModerationError> {
        ModerationPolicy::authorize_actor(cmd.actor.role, ModerationAction::ModerateContent)
            .into_result()?;

        let post = self
            .posts
            .find_by_id(&cmd.post_id)
            .await?
            .ok_or(ModerationError::not_found(EntityKind::Post))?;

        post.moderation_state()
            .transition_to(PostModerationState::Deleted)?;

        let outcome = self.posts.delete(&cmd.post_id).await?;
        if !outcome.is_match() {
            return Err(ModerationError::conflict(EntityKind::Post));
        }

        tracing::info!(actor = %cmd.actor.id, post_id = %cmd.post_id, "post deleted");
        Ok(())
    }
}

//! MarkFulfilledHandler - Command handler for closing out a post.

use std::sync::Arc;

use crate::domain::foundation::{PostId, StateMachine};
use crate::domain::moderation::{
    Actor, EntityKind, ModerationAction, ModerationError, ModerationPolicy, Post,
    PostModerationState, PostPatch,
};
use crate::ports::PostRepository;

#[derive(Debug, Clone)]
pub struct MarkFulfilledCommand {
    pub actor: Actor,
    pub post_id: PostId,
}

#[derive(Debug, Clone)]
pub struct MarkFulfilledResult {
    pub post: Post,
}

/// Marks a post fulfilled and drops any pending report. Idempotent.
pub struct MarkFulfilledHandler {
    posts: Arc<dyn PostRepository>,
}

impl MarkFulfilledHandler {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    pub async fn handle(
        &self,
        cmd: MarkFulfilledCommand,
    ) -> Result<MarkFulfilledResult, ModerationError> {
        ModerationPolicy::authorize_actor(cmd.actor.role, ModerationAction::ModerateContent)
            .into_result()?;

        let mut post = self
            .posts
            .find_by_id(&cmd.post_id)
            .await?
            .ok_or(ModerationError::not_found(EntityKind::Post))?;

        post.moderation_state()
            .transition_to(PostModerationState::Fulfilled)?;

        let patch = PostPatch::fulfill();
        let outcome = self.posts.update_flags(&cmd.post_id, &patch).await?;
        if !outcome.is_match() {
            return Err(ModerationError::conflict(EntityKind::Post));
        }

        post.apply(&patch);
        tracing::info!(actor = %cmd.actor.id, post_id = %cmd.post_id, "post fulfilled");
        Ok(MarkFulfilledResult { post })
    }
}

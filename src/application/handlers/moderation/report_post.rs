//! ReportPostHandler - Command handler for flagging a post for review.

use std::sync::Arc;

use crate::domain::foundation::{PostId, StateMachine};
use crate::domain::moderation::{
    Actor, EntityKind, ModerationAction, ModerationError, ModerationPolicy, PostModerationState,
    PostPatch,
};
use crate::ports::PostRepository;

#[derive(Debug, Clone)]
pub struct ReportPostCommand {
    pub actor: Actor,
    pub post_id: PostId,
}

/// Any active account may report. Reporting twice is harmless;
/// reporting a fulfilled post is refused.
pub struct ReportPostHandler {
    posts: Arc<dyn PostRepository>,
}

impl ReportPostHandler {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    pub async fn handle(&self, cmd: ReportPostCommand) -> Result<(), ModerationError> {
        ModerationPolicy::authorize_actor(cmd.actor.role, ModerationAction::ReportContent)
            .into_result()?;

        let post = self
            .posts
            .find_by_id(&cmd.post_id)
            .await?
            .ok_or(ModerationError::not_found(EntityKind::Post))?;

        post.moderation_state()
            .transition_to(PostModerationState::Reported)?;

        let outcome = self
            .posts
            .update_flags(&cmd.post_id, &PostPatch::report())
            .await?;
        if !outcome.is_match() {
            return Err(ModerationError::conflict(EntityKind::Post));
        }

        tracing::info!(actor = %cmd.actor.id, post_id = %cmd.post_id, "post reported");
        Ok(())
    }
}

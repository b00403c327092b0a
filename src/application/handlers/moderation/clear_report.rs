//! ClearReportHandler - Command handler for dismissing a report.

use std::sync::Arc;

use crate::domain::foundation::{PostId, StateMachine};
use crate::domain::moderation::{
    Actor, EntityKind, ModerationAction, ModerationError, ModerationPolicy, PostModerationState,
    PostPatch,
};
use crate::ports::PostRepository;

#[derive(Debug, Clone)]
pub struct ClearReportCommand {
    pub actor: Actor,
    pub post_id: PostId,
}

#[derive(Debug, Clone)]
pub struct ClearReportResult {
    pub state: PostModerationState,
    /// False when the post was not reported to begin with.
    pub changed: bool,
}

pub struct ClearReportHandler {
    posts: Arc<dyn PostRepository>,
}

impl ClearReportHandler {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    pub async fn handle(&self, cmd: ClearReportCommand) -> Result<ClearReportResult, ModerationError> {
        ModerationPolicy::authorize_actor(cmd.actor.role, ModerationAction::ModerateContent)
            .into_result()?;

        let post = self
            .posts
            .find_by_id(&cmd.post_id)
            .await?
            .ok_or(ModerationError::not_found(EntityKind::Post))?;

        let current = post.moderation_state();
        if current != PostModerationState::Reported {
            return Ok(ClearReportResult {
                state: current,
                changed: false,
            });
        }
        let next = current.transition_to(PostModerationState::Visible)?;

        let outcome = self
            .posts
            .update_flags(&cmd.post_id, &PostPatch::clear_report())
            .await?;
        if !outcome.is_match() {
            return Err(ModerationError::conflict(EntityKind::Post));
        }

        tracing::info!(actor = %cmd.actor.id, post_id = %cmd.post_id, "report cleared");
        Ok(ClearReportResult {
            state: next,
            changed: true,
        })
    }
}

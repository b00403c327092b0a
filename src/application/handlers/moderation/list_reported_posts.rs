//! ListReportedPostsHandler - Query handler for the moderation queue.

use std::sync::Arc;

use crate::domain::moderation::{
    Actor, ModerationAction, ModerationError, ModerationPolicy, Post,
};
use crate::ports::PostRepository;

#[derive(Debug, Clone)]
pub struct ListReportedPostsQuery {
    pub actor: Actor,
}

#[derive(Debug, Clone)]
pub struct ListReportedPostsResult {
    pub posts: Vec<Post>,
}

pub struct ListReportedPostsHandler {
    posts: Arc<dyn PostRepository>,
}

impl ListReportedPostsHandler {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    pub async fn handle(
        &self,
        query: ListReportedPostsQuery,
    ) -> Result<ListReportedPostsResult, ModerationError> {
        ModerationPolicy::authorize_actor(query.actor.role, ModerationAction::ModerateContent)
            .into_result()?;

        let posts = self.posts.find_reported().await?;
        Ok(ListReportedPostsResult { posts })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::domain::moderation::{PostPatch, Role};

    #[tokio::test]
    async fn lists_only_reported_posts() {
        let posts = Arc::new(forum_posts());
        posts.update_flags(&pid("p2"), &PostPatch::report()).await.unwrap();
        let h = ListReportedPostsHandler::new(posts);

        let result = h
            .handle(ListReportedPostsQuery {
                actor: actor("ada", Role::Admin),
            })
            .await
            .unwrap();

        assert_eq!(result.posts.len(), 1);
        assert_eq!(result.posts[0].id().as_str(), "p2");
    }

    #[tokio::test]
    async fn plain_user_is_denied() {
        let h = ListReportedPostsHandler::new(Arc::new(forum_posts()));
        let err = h
            .handle(ListReportedPostsQuery {
                actor: actor("alice", Role::User),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ModerationError::AuthorizationDenied(_)));
    }
}

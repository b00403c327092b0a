use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, PostId};
use crate::domain::moderation::{Post, PostPatch};
use crate::ports::{PostRepository, UpdateOutcome};

#[derive(Debug, Clone, Default)]
pub struct InMemoryPostRepository {
    posts: Arc<RwLock<HashMap<PostId, Post>>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        let map = posts.into_iter().map(|p| (p.id().clone(), p)).collect();
        Self {
            posts: Arc::new(RwLock::new(map)),
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, DomainError> {
        Ok(self.posts.read().await.get(id).cloned())
    }

    async fn find_reported(&self) -> Result<Vec<Post>, DomainError> {
        let posts = self.posts.read().await;
        let mut reported: Vec<Post> = posts.values().filter(|p| p.is_reported()).cloned().collect();
        reported.sort_by(|a, b| {
            a.created_at()
                .cmp(b.created_at())
                .then_with(|| a.id().as_str().cmp(b.id().as_str()))
        });
        Ok(reported)
    }

    async fn save(&self, post: &Post) -> Result<(), DomainError> {
        self.posts
            .write()
            .await
            .insert(post.id().clone(), post.clone());
        Ok(())
    }

    async fn update_flags(
        &self,
        id: &PostId,
        patch: &PostPatch,
    ) -> Result<UpdateOutcome, DomainError> {
        let mut posts = self.posts.write().await;
        Ok(match posts.get_mut(id) {
            Some(post) => UpdateOutcome::matched(post.apply(patch)),
            None => UpdateOutcome::none(),
        })
    }

    async fn delete(&self, id: &PostId) -> Result<UpdateOutcome, DomainError> {
        let removed = self.posts.write().await.remove(id);
        Ok(if removed.is_some() {
            UpdateOutcome::matched(true)
        } else {
            UpdateOutcome::none()
        })
    }
}

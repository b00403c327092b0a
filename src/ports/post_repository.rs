//! Post repository port.
//!
//! Only the moderation-relevant surface of the content store: flag
//! updates, the reported queue and hard deletion.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PostId};
use crate::domain::moderation::{Post, PostPatch};

use super::UpdateOutcome;

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a post by ID. Returns `None` if not found or deleted.
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, DomainError>;

    /// Posts currently flagged for review, oldest first.
    async fn find_reported(&self) -> Result<Vec<Post>, DomainError>;

    /// Insert or replace a post.
    async fn save(&self, post: &Post) -> Result<(), DomainError>;

    /// Apply a flag patch to the post, atomically.
    async fn update_flags(&self, id: &PostId, patch: &PostPatch)
        -> Result<UpdateOutcome, DomainError>;

    /// Remove the post permanently.
    async fn delete(&self, id: &PostId) -> Result<UpdateOutcome, DomainError>;
}

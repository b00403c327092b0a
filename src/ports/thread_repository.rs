//! Thread repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ThreadId};
use crate::domain::thread::{Message, Thread};

use super::UpdateOutcome;

#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Find a thread by ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &ThreadId) -> Result<Option<Thread>, DomainError>;

    /// Insert or replace a thread.
    async fn save(&self, thread: &Thread) -> Result<(), DomainError>;

    /// Append a message to an existing thread.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the sender is not a participant
    async fn append_message(
        &self,
        id: &ThreadId,
        message: Message,
    ) -> Result<UpdateOutcome, DomainError>;
}

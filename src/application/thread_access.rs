//! ThreadAccessGuard - confines thread reads and writes to participants.

use std::sync::Arc;

use crate::domain::foundation::{ThreadId, UserId};
use crate::domain::moderation::{EntityKind, ModerationError};
use crate::domain::thread::Thread;
use crate::ports::ThreadRepository;

pub struct ThreadAccessGuard {
    threads: Arc<dyn ThreadRepository>,
}

impl ThreadAccessGuard {
    pub fn new(threads: Arc<dyn ThreadRepository>) -> Self {
        Self { threads }
    }

    /// Load a thread on behalf of `identity`.
    ///
    /// The raw id is validated before the store is touched, so malformed
    /// ids never reach the repository.
    pub async fn authorize(
        &self,
        identity: &UserId,
        raw_thread_id: &str,
    ) -> Result<Thread, ModerationError> {
        let thread_id = ThreadId::parse(raw_thread_id)?;

        let thread = self
            .threads
            .find_by_id(&thread_id)
            .await?
            .ok_or(ModerationError::not_found(EntityKind::Thread))?;

        if !thread.includes(identity) {
            tracing::warn!(user_id = %identity, thread_id = %thread_id, "thread access refused");
            return Err(ModerationError::denied("not a participant of this thread"));
        }

        Ok(thread)
    }
}

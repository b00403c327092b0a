//! GetThreadHandler - Query handler for reading a private thread.

use std::sync::Arc;

use crate::application::ThreadAccessGuard;
use crate::domain::foundation::UserId;
use crate::domain::moderation::ModerationError;
use crate::domain::thread::Thread;

#[derive(Debug, Clone)]
pub struct GetThreadQuery {
    pub requester: UserId,
    /// Unvalidated id as received from the caller.
    pub raw_thread_id: String,
}

pub struct GetThreadHandler {
    guard: Arc<ThreadAccessGuard>,
}

impl GetThreadHandler {
    pub fn new(guard: Arc<ThreadAccessGuard>) -> Self {
        Self { guard }
    }

    pub async fn handle(&self, query: GetThreadQuery) -> Result<Thread, ModerationError> {
        self.guard
            .authorize(&query.requester, &query.raw_thread_id)
            .await
    }
}

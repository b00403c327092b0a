use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ThreadId};
use crate::domain::thread::{Message, Thread};
use crate::ports::{ThreadRepository, UpdateOutcome};

#[derive(Debug, Clone, Default)]
pub struct InMemoryThreadRepository {
    threads: Arc<RwLock<HashMap<ThreadId, Thread>>>,
    lookups: Arc<AtomicUsize>,
}

impl InMemoryThreadRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threads(threads: impl IntoIterator<Item = Thread>) -> Self {
        let map = threads.into_iter().map(|t| (t.id().clone(), t)).collect();
        Self {
            threads: Arc::new(RwLock::new(map)),
            lookups: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of `find_by_id` calls served so far.
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ThreadRepository for InMemoryThreadRepository {
    async fn find_by_id(&self, id: &ThreadId) -> Result<Option<Thread>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.threads.read().await.get(id).cloned())
    }

    async fn save(&self, thread: &Thread) -> Result<(), DomainError> {
        self.threads
            .write()
            .await
            .insert(thread.id().clone(), thread.clone());
        Ok(())
    }

    async fn append_message(
        &self,
        id: &ThreadId,
        message: Message,
    ) -> Result<UpdateOutcome, DomainError> {
        let mut threads = self.threads.write().await;
        match threads.get_mut(id) {
            Some(thread) => {
                thread.push(message)?;
                Ok(UpdateOutcome::matched(true))
            }
            None => Ok(UpdateOutcome::none()),
        }
    }
}

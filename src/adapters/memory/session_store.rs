use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::session::{Reconciliation, SessionSnapshot, SessionToken};
use crate::ports::SessionStore;

#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionToken, SessionSnapshot>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, token: &SessionToken) -> Result<Option<SessionSnapshot>, DomainError> {
        Ok(self.sessions.read().await.get(token).cloned())
    }

    async fn save(
        &self,
        token: &SessionToken,
        snapshot: &SessionSnapshot,
    ) -> Result<(), DomainError> {
        self.sessions
            .write()
            .await
            .insert(token.clone(), snapshot.clone());
        Ok(())
    }

    async fn patch(
        &self,
        token: &SessionToken,
        reconciliation: &Reconciliation,
    ) -> Result<Option<SessionSnapshot>, DomainError> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.get_mut(token).map(|snapshot| {
            snapshot.apply(reconciliation);
            snapshot.clone()
        }))
    }

    async fn remove(&self, token: &SessionToken) -> Result<(), DomainError> {
        self.sessions.write().await.remove(token);
        Ok(())
    }
}

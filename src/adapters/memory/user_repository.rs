use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::moderation::{Role, User, UserPatch};
use crate::ports::{UpdateOutcome, UserMatch, UserRepository};

#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `users`.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let map = users.into_iter().map(|u| (u.id().clone(), u)).collect();
        Self {
            users: Arc::new(RwLock::new(map)),
        }
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_roles(&self, roles: &[Role]) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        let mut found: Vec<User> = users
            .values()
            .filter(|u| roles.contains(&u.role()))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(found)
    }

    async fn save(&self, user: &User) -> Result<(), DomainError> {
        self.users
            .write()
            .await
            .insert(user.id().clone(), user.clone());
        Ok(())
    }

    async fn update_where(
        &self,
        criteria: &UserMatch,
        patch: &UserPatch,
    ) -> Result<UpdateOutcome, DomainError> {
        let mut users = self.users.write().await;
        match users.get_mut(&criteria.id) {
            Some(user) if criteria.matches(user) => Ok(UpdateOutcome::matched(user.apply(patch))),
            _ => Ok(UpdateOutcome::none()),
        }
    }
}

//! Shared fixtures for moderation handler tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::adapters::memory::{InMemoryPostRepository, InMemoryUserRepository};
use crate::domain::foundation::{DomainError, ErrorCode, PostId, Timestamp, UserId};
use crate::domain::moderation::{Actor, Post, Role, User, UserPatch};
use crate::ports::{SessionUpdateNotifier, UpdateOutcome, UserMatch, UserRepository};

// ════════════════════════════════════════════════════════════════════════════
// Mock Implementations
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Role(UserId, Role),
    Banned(UserId, bool),
}

#[derive(Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionUpdateNotifier for RecordingNotifier {
    async fn record_role_change(&self, target: &UserId, role: Role) {
        self.notifications
            .lock()
            .unwrap()
            .push(Notification::Role(target.clone(), role));
    }

    async fn record_banned_change(&self, target: &UserId, is_banned: bool) {
        self.notifications
            .lock()
            .unwrap()
            .push(Notification::Banned(target.clone(), is_banned));
    }
}

/// Changes the target's role right before the first conditional update,
/// as if another admin acted between the handler's read and write.
pub struct RacingUserRepository {
    inner: InMemoryUserRepository,
    interfering_role: Role,
    raced: Mutex<bool>,
}

impl RacingUserRepository {
    pub fn new(inner: InMemoryUserRepository, interfering_role: Role) -> Self {
        Self {
            inner,
            interfering_role,
            raced: Mutex::new(false),
        }
    }
}

#[async_trait]
impl UserRepository for RacingUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_roles(&self, roles: &[Role]) -> Result<Vec<User>, DomainError> {
        self.inner.find_by_roles(roles).await
    }

    async fn save(&self, user: &User) -> Result<(), DomainError> {
        self.inner.save(user).await
    }

    async fn update_where(
        &self,
        criteria: &UserMatch,
        patch: &UserPatch,
    ) -> Result<UpdateOutcome, DomainError> {
        let first = {
            let mut raced = self.raced.lock().unwrap();
            !std::mem::replace(&mut *raced, true)
        };
        if first {
            self.inner
                .update_where(
                    &UserMatch::by_id(criteria.id.clone()),
                    &UserPatch::ChangeRole {
                        role: self.interfering_role,
                        at: Timestamp::now(),
                        by: UserId::new("other-admin").unwrap(),
                    },
                )
                .await?;
        }
        self.inner.update_where(criteria, patch).await
    }
}

/// Every call fails with a database error.
pub struct FailingUserRepository;

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn find_by_id(&self, _id: &UserId) -> Result<Option<User>, DomainError> {
        Err(DomainError::new(ErrorCode::DatabaseError, "Simulated failure"))
    }

    async fn find_by_roles(&self, _roles: &[Role]) -> Result<Vec<User>, DomainError> {
        Err(DomainError::new(ErrorCode::DatabaseError, "Simulated failure"))
    }

    async fn save(&self, _user: &User) -> Result<(), DomainError> {
        Err(DomainError::new(ErrorCode::DatabaseError, "Simulated failure"))
    }

    async fn update_where(
        &self,
        _criteria: &UserMatch,
        _patch: &UserPatch,
    ) -> Result<UpdateOutcome, DomainError> {
        Err(DomainError::new(ErrorCode::DatabaseError, "Simulated failure"))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Test Helpers
// ════════════════════════════════════════════════════════════════════════════

pub fn uid(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

pub fn pid(id: &str) -> PostId {
    PostId::new(id).unwrap()
}

pub fn actor(id: &str, role: Role) -> Actor {
    Actor::new(uid(id), role)
}

/// alice (user), bob (user), mia (moderator), max (moderator), ada (admin), alan (admin)
pub fn forum_users() -> InMemoryUserRepository {
    InMemoryUserRepository::with_users([
        User::new(uid("alice"), "alice", Role::User),
        User::new(uid("bob"), "bob", Role::User),
        User::new(uid("mia"), "mia", Role::Moderator),
        User::new(uid("max"), "max", Role::Moderator),
        User::new(uid("ada"), "ada", Role::Admin),
        User::new(uid("alan"), "alan", Role::Admin),
    ])
}

pub fn forum_posts() -> InMemoryPostRepository {
    InMemoryPostRepository::with_posts([
        Post::new(pid("p1"), uid("alice"), "Hello", "First post"),
        Post::new(pid("p2"), uid("bob"), "Spam", "Buy now"),
    ])
}

pub fn notifier() -> Arc<RecordingNotifier> {
    Arc::new(RecordingNotifier::default())
}

//! SessionStateBroker - propagates privilege changes to issued sessions.
//!
//! Moderation records the new role or ban status of a target here after
//! the store write succeeds. The next request carrying a session for that
//! target reconciles: the pending values are patched into the stored
//! snapshot and only then consumed.
//!
//! The pending maps stay locked while the store is patched, so two
//! reconciliations for one account never interleave, and a failed patch
//! leaves the entry for the next request.
//!
//! # Limitations
//!
//! - Entries live in process memory and are lost on restart.
//! - With several live sessions for one account, only the first session
//!   to reconcile sees the change.
//! - Entries for accounts that never make another request stay forever;
//!   [`SessionStateBroker::pending_count`] exposes the backlog.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::moderation::Role;
use crate::domain::session::{Reconciliation, SessionSnapshot, SessionToken};
use crate::ports::{SessionStore, SessionUpdateNotifier};

#[derive(Debug, Default)]
struct PendingUpdates {
    roles: HashMap<UserId, Role>,
    banned: HashMap<UserId, bool>,
}

impl PendingUpdates {
    fn peek(&self, user_id: &UserId) -> Reconciliation {
        Reconciliation {
            role: self.roles.get(user_id).copied(),
            banned: self.banned.get(user_id).copied(),
        }
    }

    fn consume(&mut self, user_id: &UserId) {
        self.roles.remove(user_id);
        self.banned.remove(user_id);
    }
}

/// Process-wide holder of not-yet-applied privilege changes.
///
/// Construct once at start-up over the session store and share through `Arc`.
pub struct SessionStateBroker {
    sessions: Arc<dyn SessionStore>,
    pending: Mutex<PendingUpdates>,
}

impl SessionStateBroker {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            sessions,
            pending: Mutex::new(PendingUpdates::default()),
        }
    }

    /// Bring a loaded session up to date with any pending changes.
    ///
    /// Must run before anything reads the session's role or ban flag.
    /// With nothing pending the loaded snapshot is returned untouched and
    /// the store is not written. Otherwise the stored snapshot is patched
    /// and returned, so fields another request already reconciled survive
    /// even when `loaded` is older than the store.
    ///
    /// Returns `Ok(None)` when the token disappeared from the store; the
    /// pending entries are kept.
    ///
    /// # Errors
    ///
    /// A failed store patch is returned as-is and the pending entries are
    /// kept.
    pub async fn reconcile(
        &self,
        token: &SessionToken,
        loaded: SessionSnapshot,
    ) -> Result<Option<SessionSnapshot>, DomainError> {
        let mut pending = self.pending.lock().await;
        let reconciliation = pending.peek(&loaded.user_id);
        if reconciliation.is_empty() {
            return Ok(Some(loaded));
        }

        let patched = match self.sessions.patch(token, &reconciliation).await {
            Ok(patched) => patched,
            Err(e) => {
                tracing::warn!(
                    user_id = %loaded.user_id,
                    error = %e,
                    "session patch failed; pending update kept"
                );
                return Err(e);
            }
        };
        let Some(patched) = patched else {
            tracing::debug!(user_id = %loaded.user_id, token = %token, "session vanished before reconcile");
            return Ok(None);
        };

        pending.consume(&loaded.user_id);
        drop(pending);

        tracing::info!(
            user_id = %patched.user_id,
            role = ?reconciliation.role,
            banned = ?reconciliation.banned,
            "session reconciled"
        );
        Ok(Some(patched))
    }

    /// Number of distinct accounts with unconsumed entries.
    pub async fn pending_count(&self) -> usize {
        let pending = self.pending.lock().await;
        let mut ids: Vec<&UserId> = pending.roles.keys().chain(pending.banned.keys()).collect();
        ids.sort();
        ids.dedup();
        ids.len()
    }
}

#[async_trait]
impl SessionUpdateNotifier for SessionStateBroker {
    async fn record_role_change(&self, target: &UserId, role: Role) {
        self.pending.lock().await.roles.insert(target.clone(), role);
        tracing::debug!(target = %target, role = %role, "pending role change recorded");
    }

    async fn record_banned_change(&self, target: &UserId, is_banned: bool) {
        self.pending
            .lock()
            .await
            .banned
            .insert(target.clone(), is_banned);
        tracing::debug!(target = %target, is_banned, "pending ban change recorded");
    }
}

//! Session store port.
//!
//! Holds issued session snapshots keyed by bearer token. The serving
//! layer owns sessions; moderation never writes here directly.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::session::{Reconciliation, SessionSnapshot, SessionToken};

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the snapshot for a token. Returns `None` for unknown tokens.
    async fn load(&self, token: &SessionToken) -> Result<Option<SessionSnapshot>, DomainError>;

    /// Insert or replace the snapshot for a token.
    async fn save(&self, token: &SessionToken, snapshot: &SessionSnapshot)
        -> Result<(), DomainError>;

    /// Apply reconciled values to the stored snapshot in one atomic step
    /// and return the result. Fields absent from `reconciliation` keep
    /// whatever is stored, never a caller's older copy. Returns `None`
    /// for unknown tokens.
    async fn patch(
        &self,
        token: &SessionToken,
        reconciliation: &Reconciliation,
    ) -> Result<Option<SessionSnapshot>, DomainError>;

    /// Forget a token. Removing an unknown token is not an error.
    async fn remove(&self, token: &SessionToken) -> Result<(), DomainError>;
}

//! Session domain module.
//!
//! A session is the per-login cache of an account's privileges. It is
//! created by the authentication flow and afterwards only changed by
//! reconciliation against pending updates recorded by moderation.

mod reconciliation;
mod snapshot;
mod token;

pub use reconciliation::Reconciliation;
pub use snapshot::SessionSnapshot;
pub use token::SessionToken;

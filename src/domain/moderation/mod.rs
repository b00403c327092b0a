//! Moderation domain: roles, accounts, posts and the policy table.

mod errors;
pub mod policy;
mod post;
mod role;
mod user;

pub use errors::{EntityKind, ModerationError};
pub use policy::{
    Actor, DenyReason, ModerationAction, ModerationPolicy, PolicyDecision, TargetAccount,
};
pub use post::{Post, PostModerationState, PostPatch};
pub use role::Role;
pub use user::{User, UserPatch};

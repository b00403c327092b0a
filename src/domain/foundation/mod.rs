//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, the state machine trait and error
//! types that form the vocabulary of the moderation domain.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{PostId, ThreadId, UserId, THREAD_ID_LEN};
pub use state_machine::{StateMachine, TransitionError};
pub use timestamp::Timestamp;

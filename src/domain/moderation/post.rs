//! Forum post and its moderation lifecycle.
//!
//! ```text
//!   visible ──report──▶ reported ──clear──▶ visible
//!      │                   │
//!      └────fulfill────────┴──▶ fulfilled      (any) ──delete──▶ deleted
//! ```
//!
//! A deleted post is removed from the store; `Deleted` exists so the
//! lifecycle is complete and terminal.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PostId, StateMachine, Timestamp, UserId};

/// Moderation state derived from a post's flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostModerationState {
    Visible,
    Reported,
    Fulfilled,
    Deleted,
}

impl StateMachine for PostModerationState {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use PostModerationState::*;
        match self {
            Visible => vec![Reported, Fulfilled, Deleted],
            Reported => vec![Reported, Visible, Fulfilled, Deleted],
            Fulfilled => vec![Fulfilled, Deleted],
            Deleted => vec![],
        }
    }
}

/// Flag changes applied atomically by the post store.
///
/// `None` leaves the flag untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PostPatch {
    pub reported: Option<bool>,
    pub fulfilled: Option<bool>,
}

impl PostPatch {
    /// Flag the post for review.
    pub fn report() -> Self {
        Self {
            reported: Some(true),
            fulfilled: None,
        }
    }

    /// Drop the review flag only.
    pub fn clear_report() -> Self {
        Self {
            reported: Some(false),
            fulfilled: None,
        }
    }

    /// Mark fulfilled; a fulfilled post is no longer pending review.
    pub fn fulfill() -> Self {
        Self {
            reported: Some(false),
            fulfilled: Some(true),
        }
    }
}

/// A forum post. Content fields are carried but not interpreted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    id: PostId,
    author_id: UserId,
    title: String,
    body: String,
    reported: bool,
    fulfilled: bool,
    created_at: Timestamp,
}

impl Post {
    /// Creates a new visible post.
    pub fn new(
        id: PostId,
        author_id: UserId,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id,
            author_id,
            title: title.into(),
            body: body.into(),
            reported: false,
            fulfilled: false,
            created_at: Timestamp::now(),
        }
    }

    pub fn id(&self) -> &PostId {
        &self.id
    }

    pub fn author_id(&self) -> &UserId {
        &self.author_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn is_reported(&self) -> bool {
        self.reported
    }

    pub fn is_fulfilled(&self) -> bool {
        self.fulfilled
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns the current lifecycle state.
    pub fn moderation_state(&self) -> PostModerationState {
        if self.fulfilled {
            PostModerationState::Fulfilled
        } else if self.reported {
            PostModerationState::Reported
        } else {
            PostModerationState::Visible
        }
    }

    /// Applies a flag patch in place. Returns true if anything changed.
    pub fn apply(&mut self, patch: &PostPatch) -> bool {
        let before = (self.reported, self.fulfilled);
        if let Some(reported) = patch.reported {
            self.reported = reported;
        }
        if let Some(fulfilled) = patch.fulfilled {
            self.fulfilled = fulfilled;
        }
        before != (self.reported, self.fulfilled)
    }
}

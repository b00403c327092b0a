//! Private two-party message threads.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ThreadId, Timestamp, UserId, ValidationError};

/// A single message in a thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: UserId,
    pub body: String,
    pub sent_at: Timestamp,
}

impl Message {
    pub fn new(sender: UserId, body: impl Into<String>) -> Result<Self, ValidationError> {
        let body = body.into();
        if body.trim().is_empty() {
            return Err(ValidationError::empty_field("body"));
        }
        Ok(Self {
            sender,
            body,
            sent_at: Timestamp::now(),
        })
    }
}

/// A conversation between exactly two distinct participants.
///
/// Participant order carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    id: ThreadId,
    participants: [UserId; 2],
    messages: Vec<Message>,
}

impl Thread {
    pub fn new(id: ThreadId, first: UserId, second: UserId) -> Result<Self, ValidationError> {
        if first == second {
            return Err(ValidationError::invalid_format(
                "participants",
                "a thread needs two distinct participants",
            ));
        }
        Ok(Self {
            id,
            participants: [first, second],
            messages: Vec::new(),
        })
    }

    pub fn id(&self) -> &ThreadId {
        &self.id
    }

    pub fn participants(&self) -> &[UserId; 2] {
        &self.participants
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn includes(&self, user_id: &UserId) -> bool {
        self.participants.contains(user_id)
    }

    /// Appends a message. The sender must be a participant.
    pub fn push(&mut self, message: Message) -> Result<(), ValidationError> {
        if !self.includes(&message.sender) {
            return Err(ValidationError::invalid_format(
                "sender",
                "sender is not a participant",
            ));
        }
        self.messages.push(message);
        Ok(())
    }
}

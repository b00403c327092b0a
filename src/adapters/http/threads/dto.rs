//! Request and response DTOs for thread endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::thread::{Message, Thread};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageView {
    pub sender: String,
    pub body: String,
    pub sent_at: String,
}

impl From<&Message> for MessageView {
    fn from(message: &Message) -> Self {
        Self {
            sender: message.sender.to_string(),
            body: message.body.clone(),
            sent_at: message.sent_at.as_datetime().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThreadView {
    pub id: String,
    pub participants: Vec<String>,
    pub messages: Vec<MessageView>,
}

impl From<&Thread> for ThreadView {
    fn from(thread: &Thread) -> Self {
        Self {
            id: thread.id().to_string(),
            participants: thread.participants().iter().map(|p| p.to_string()).collect(),
            messages: thread.messages().iter().map(MessageView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    pub body: String,
}

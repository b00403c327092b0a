//! SendMessageHandler - Command handler for posting into a private thread.

use std::sync::Arc;

use crate::application::ThreadAccessGuard;
use crate::domain::foundation::UserId;
use crate::domain::moderation::{EntityKind, ModerationError};
use crate::domain::thread::Message;
use crate::ports::ThreadRepository;

#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    pub sender: UserId,
    pub raw_thread_id: String,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct SendMessageResult {
    pub message: Message,
}

pub struct SendMessageHandler {
    guard: Arc<ThreadAccessGuard>,
    threads: Arc<dyn ThreadRepository>,
}

impl SendMessageHandler {
    pub fn new(guard: Arc<ThreadAccessGuard>, threads: Arc<dyn ThreadRepository>) -> Self {
        Self { guard, threads }
    }

    pub async fn handle(&self, cmd: SendMessageCommand) -> Result<SendMessageResult, ModerationError> {
        let thread = self.guard.authorize(&cmd.sender, &cmd.raw_thread_id).await?;

        let message = Message::new(cmd.sender, cmd.body)?;
        let outcome = self
            .threads
            .append_message(thread.id(), message.clone())
            .await?;
        if !outcome.is_match() {
            return Err(ModerationError::conflict(EntityKind::Thread));
        }

        tracing::debug!(thread_id = %thread.id(), sender = %message.sender, "message appended");
        Ok(SendMessageResult { message })
    }
}

//! Private thread handlers. Access is always checked by `ThreadAccessGuard`.

mod get_thread;
mod send_message;

pub use get_thread::{GetThreadHandler, GetThreadQuery};
pub use send_message::{SendMessageCommand, SendMessageHandler, SendMessageResult};

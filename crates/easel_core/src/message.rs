//! Chat message types.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single text message in a chat completion request.
///
/// # Examples
///
/// ```
/// use easel_core::{ChatMessage, Role};
///
/// let message = ChatMessage::user("Give me an idea");
/// assert_eq!(message.role, Role::User);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The role of the message sender
    pub role: Role,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

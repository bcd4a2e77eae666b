//! Task payload construction and response handling

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::message::{Message, Role};

/// Fallback reply when the response carries no messages at all
pub const NO_RESPONSE_REPLY: &str = "No response received in messages.";

/// Fallback reply when the last message is not a well-formed agent reply
pub const UNPARSEABLE_REPLY: &str = "Could not parse agent's reply from messages.";

/// Fallback reply when the agent's part carries no text
pub const EMPTY_TEXT_REPLY: &str = "Agent replied with no text.";

/// A task submitted to an agent
///
/// Each payload carries a globally-unique random id, so submitting the same
/// question twice creates two distinct tasks on the server. The payload is
/// built once and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskPayload {
    /// Unique identifier for the task (random v4 UUID)
    pub id: String,

    /// The user message carried by the task
    pub message: Message,
}

impl TaskPayload {
    /// Create a new task payload wrapping the user's query
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            message: Message::user(query),
        }
    }
}

/// The agent's response to a submitted task
///
/// Servers return the conversation so far, typically the user's message
/// followed by the agent's reply. A missing `messages` key reads as empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TaskResponse {
    /// Conversation messages in the order the server returned them
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl TaskResponse {
    /// Extract the agent's reply text from the response
    ///
    /// The last element of `messages` is trusted to be the agent's newest
    /// reply. It must have the agent role and at least one part; its first
    /// part's text is returned. Anomalies produce descriptive fallback
    /// strings rather than errors, since a malformed reply only affects
    /// what gets displayed.
    pub fn reply_text(&self) -> String {
        let Some(reply) = self.messages.last() else {
            return NO_RESPONSE_REPLY.to_string();
        };

        if reply.role != Role::Agent || reply.parts.is_empty() {
            return UNPARSEABLE_REPLY.to_string();
        }

        reply.parts[0]
            .text
            .clone()
            .unwrap_or_else(|| EMPTY_TEXT_REPLY.to_string())
    }
}

//! A2A message types

use serde::{Deserialize, Serialize};

/// A message in the A2A protocol
///
/// Messages are the unit of communication between a user and an agent. Each
/// message has a role and an ordered list of parts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Role of the message sender
    pub role: Role,

    /// Message content parts
    #[serde(default)]
    pub parts: Vec<MessagePart>,
}

impl Message {
    /// Create a new message with a single text part
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![MessagePart::text(text)],
        }
    }

    /// Create a user message with text content
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    /// Create an agent message with text content
    pub fn agent(text: impl Into<String>) -> Self {
        Self::new(Role::Agent, text)
    }
}

/// Role of a message sender
///
/// Serialized in lowercase on the wire. Any role string other than `user`
/// or `agent` deserializes to [`Role::Unknown`] so that a foreign role in a
/// server response stays a display-level anomaly instead of a parse failure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Role {
    /// Message from a user
    User,

    /// Message from an AI agent
    Agent,

    /// Any role this client does not recognize
    Unknown,
}

impl From<String> for Role {
    fn from(role: String) -> Self {
        match role.as_str() {
            "user" => Role::User,
            "agent" => Role::Agent,
            _ => Role::Unknown,
        }
    }
}

/// A part of a message
///
/// This protocol only carries text parts, and servers may omit the `text`
/// field entirely; callers decide how to render a missing text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MessagePart {
    /// The text content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl MessagePart {
    /// Create a text part
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

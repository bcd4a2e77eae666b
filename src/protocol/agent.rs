//! Agent discovery types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Agent descriptor for agent discovery
///
/// The descriptor is published at `/.well-known/agent.json` and identifies
/// the agent and what it can do. Every field is optional and no validation
/// is applied beyond JSON well-formedness; fallbacks are supplied only when
/// displaying the descriptor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AgentDescriptor {
    /// Name of the agent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Human-readable description of the agent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Base URL the agent advertises for itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Agent capabilities, kept opaque (no schema enforcement)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Value>,
}

impl AgentDescriptor {
    /// The agent's name, or `"Unknown Agent"` when the field is absent
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown Agent")
    }

    /// The agent's description, or `"No description"` when the field is absent
    pub fn display_description(&self) -> &str {
        self.description.as_deref().unwrap_or("No description")
    }
}

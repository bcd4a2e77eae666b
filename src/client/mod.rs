//! High-level client API

pub mod agent;

pub use agent::AgentClient;

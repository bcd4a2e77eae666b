//! # A2A Task Client
//!
//! A minimal client for the Agent2Agent (A2A) discovery and task submission
//! protocol.
//!
//! The client performs two operations against a remote agent: fetching its
//! descriptor from the well-known discovery path, and submitting a single
//! task carrying a user message. Transports are abstracted behind a trait so
//! the protocol logic can be exercised without a network.
//!
//! ## Example
//!
//! ```rust,no_run
//! use a2a_task_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let url = "http://127.0.0.1:5000".parse().unwrap();
//!     let client = AgentClient::http(url);
//!
//!     let descriptor = client.discover().await?;
//!     println!("Connected to: {}", descriptor.display_name());
//!
//!     let payload = TaskPayload::new("What time is it?");
//!     let response = client.send_task(&payload).await?;
//!     println!("Agent says: {}", response.reply_text());
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod protocol;
pub mod transport;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        client::AgentClient,
        protocol::error::ClientError,
        protocol::{AgentDescriptor, Message, MessagePart, Role, TaskPayload, TaskResponse},
        transport::HttpTransport,
    };
}

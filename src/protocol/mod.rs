//! Core protocol types and definitions

pub mod agent;
pub mod error;
pub mod message;
pub mod operation;
pub mod task;

pub use agent::AgentDescriptor;
pub use error::{ClientError, ClientResult};
pub use message::{Message, MessagePart, Role};
pub use operation::ClientOperation;
pub use task::{TaskPayload, TaskResponse};

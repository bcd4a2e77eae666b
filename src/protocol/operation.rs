//! Client protocol operations

use bytes::Bytes;

use super::{error::ClientError, task::TaskPayload};

/// The operations this client performs against an agent
///
/// Each operation maps to a fixed endpoint and HTTP method; the pairing is
/// the protocol contract, independent of which transport carries it.
#[derive(Debug, Clone)]
pub enum ClientOperation {
    /// Fetch the agent descriptor from the well-known discovery path
    DiscoverAgent,

    /// Submit a task carrying a user message
    SendTask {
        /// The task payload to submit
        payload: TaskPayload,
    },
}

impl ClientOperation {
    /// Get the endpoint path for this operation
    pub fn endpoint(&self) -> &'static str {
        match self {
            ClientOperation::DiscoverAgent => "/.well-known/agent.json",
            ClientOperation::SendTask { .. } => "/tasks/send",
        }
    }

    /// Get the HTTP method for this operation
    pub fn method(&self) -> &'static str {
        match self {
            ClientOperation::DiscoverAgent => "GET",
            ClientOperation::SendTask { .. } => "POST",
        }
    }

    /// Serialize the request body for this operation
    ///
    /// Discovery is a bare GET and produces an empty body.
    pub fn body(&self) -> Result<Bytes, ClientError> {
        match self {
            ClientOperation::DiscoverAgent => Ok(Bytes::new()),
            ClientOperation::SendTask { payload } => {
                let bytes = serde_json::to_vec(payload)?;
                Ok(Bytes::from(bytes))
            }
        }
    }
}

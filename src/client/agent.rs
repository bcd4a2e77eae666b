//! High-level agent client

use url::Url;

use crate::{
    protocol::{
        error::ClientError, operation::ClientOperation, AgentDescriptor, TaskPayload, TaskResponse,
    },
    transport::{HttpTransport, Transport, TransportRequest, TransportResponse},
};

/// Client for agent discovery and task submission
///
/// The client is generic over the transport so protocol behavior can be
/// tested against a mock.
///
/// # Example
///
/// ```rust,no_run
/// use a2a_task_client::prelude::*;
///
/// # async fn example() -> Result<(), ClientError> {
/// let url = "http://127.0.0.1:5000".parse().unwrap();
/// let client = AgentClient::http(url);
///
/// let descriptor = client.discover().await?;
/// println!("Connected to: {}", descriptor.display_name());
/// # Ok(())
/// # }
/// ```
pub struct AgentClient<T> {
    transport: T,
}

impl AgentClient<HttpTransport> {
    /// Create a client over HTTP (the HTTP+JSON binding)
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the agent (e.g., "<http://127.0.0.1:5000>")
    pub fn http(base_url: Url) -> Self {
        Self::new(HttpTransport::new(base_url))
    }
}

impl<T> AgentClient<T>
where
    T: Transport,
{
    /// Create a new agent client over a custom transport
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The base URL of the agent this client talks to
    pub fn base_url(&self) -> &Url {
        self.transport.base_url()
    }

    /// Fetch the agent's descriptor from `/.well-known/agent.json`
    ///
    /// # Errors
    ///
    /// Returns an error on connection failure, a non-2xx status, or a body
    /// that is not valid JSON. No retry is attempted.
    pub async fn discover(&self) -> Result<AgentDescriptor, ClientError> {
        let response = self.execute(ClientOperation::DiscoverAgent).await?;
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Submit a task to `/tasks/send` and return the agent's response
    ///
    /// Submission is not idempotent: each payload carries its own id, so
    /// submitting two payloads creates two distinct tasks on the server.
    ///
    /// # Errors
    ///
    /// Returns an error on connection failure, a non-2xx status (carrying
    /// the raw response body text), or a body that is not valid JSON.
    pub async fn send_task(&self, payload: &TaskPayload) -> Result<TaskResponse, ClientError> {
        let operation = ClientOperation::SendTask {
            payload: payload.clone(),
        };

        let response = self.execute(operation).await?;
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Build the transport request for an operation, execute it, and reject
    /// non-2xx responses
    async fn execute(&self, operation: ClientOperation) -> Result<TransportResponse, ClientError> {
        let mut request = TransportRequest::new(operation.endpoint(), operation.method())
            .header("Accept", "application/json");

        let body = operation.body()?;
        if !body.is_empty() {
            request = request
                .header("Content-Type", "application/json")
                .body(body);
        }

        let response = self.transport.execute(request).await?;

        if !response.is_success() {
            return Err(ClientError::Http {
                status: response.status,
                body: response.body_text(),
            });
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use serde_json::json;

    use crate::transport::{mock::MockTransport, TransportResponse};

    use super::*;

    #[tokio::test]
    async fn test_discover() {
        let transport = MockTransport::new(|req| {
            assert_eq!(req.endpoint, "/.well-known/agent.json");
            assert_eq!(req.method, "GET");

            let body = json!({
                "name": "TimeAgent",
                "description": "Tells the time",
                "url": "http://127.0.0.1:5000",
                "capabilities": {}
            });
            TransportResponse::new(200).body(Bytes::from(body.to_string()))
        });

        let client = AgentClient::new(transport);
        let descriptor = client.discover().await.unwrap();

        assert_eq!(descriptor.display_name(), "TimeAgent");
        assert_eq!(descriptor.display_description(), "Tells the time");
    }

    #[tokio::test]
    async fn test_discover_server_error() {
        let transport = MockTransport::new(|_req| {
            TransportResponse::new(500).body(Bytes::from_static(b"internal server error"))
        });

        let client = AgentClient::new(transport);
        let err = client.discover().await.unwrap_err();

        assert!(matches!(err, ClientError::Http { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_discover_malformed_body() {
        let transport = MockTransport::new(|_req| {
            TransportResponse::new(200).body(Bytes::from_static(b"<html>not json</html>"))
        });

        let client = AgentClient::new(transport);
        let err = client.discover().await.unwrap_err();

        assert!(matches!(err, ClientError::Format(_)));
    }

    #[tokio::test]
    async fn test_send_task() {
        let transport = MockTransport::new(|req| {
            assert_eq!(req.endpoint, "/tasks/send");
            assert_eq!(req.method, "POST");
            assert_eq!(
                req.headers.get("Content-Type"),
                Some(&"application/json".to_string())
            );

            // Echo the user's message back with an agent reply appended
            let payload: TaskPayload = serde_json::from_slice(&req.body).unwrap();
            let body = json!({
                "messages": [
                    payload.message,
                    {"role": "agent", "parts": [{"text": "4 o'clock"}]}
                ]
            });
            TransportResponse::new(200).body(Bytes::from(body.to_string()))
        });

        let client = AgentClient::new(transport);
        let payload = TaskPayload::new("What time is it?");
        let response = client.send_task(&payload).await.unwrap();

        assert_eq!(response.messages.len(), 2);
        assert_eq!(response.reply_text(), "4 o'clock");
    }

    #[tokio::test]
    async fn test_send_task_not_found_surfaces_body() {
        let transport = MockTransport::new(|_req| {
            TransportResponse::new(404).body(Bytes::from_static(b"no such endpoint"))
        });

        let client = AgentClient::new(transport);
        let payload = TaskPayload::new("What time is it?");
        let err = client.send_task(&payload).await.unwrap_err();

        match err {
            ClientError::Http { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "no such endpoint");
            }
            other => panic!("expected Http error, got {:?}", other),
        }
    }
}

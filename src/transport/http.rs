//! HTTP transport implementation using reqwest

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::protocol::error::ClientError;

use super::{Transport, TransportRequest, TransportResponse};

/// HTTP transport for the HTTP+JSON protocol binding
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    /// Create a new HTTP transport
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the agent (e.g., "<http://127.0.0.1:5000>")
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create a new HTTP transport with a custom reqwest client
    pub fn with_client(base_url: Url, client: reqwest::Client) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, ClientError> {
        // Url::join resolves the leading-slash endpoint against the host,
        // regardless of whether the base URL carries a trailing slash
        let url = self
            .base_url
            .join(&request.endpoint)
            .map_err(|e| ClientError::Transport(format!("invalid request URL: {}", e)))?;

        debug!(method = %request.method, url = %url, "dispatching request");

        let mut req_builder = match request.method.as_str() {
            "GET" => self.client.get(url),
            "POST" => self.client.post(url),
            method => {
                return Err(ClientError::Transport(format!(
                    "unsupported HTTP method: {}",
                    method
                )))
            }
        };

        for (key, value) in request.headers {
            req_builder = req_builder.header(key, value);
        }

        if !request.body.is_empty() {
            req_builder = req_builder.body(request.body);
        }

        let response = req_builder.send().await?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response.bytes().await?;

        debug!(status, bytes = body.len(), "received response");

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }

    fn base_url(&self) -> &Url {
        &self.base_url
    }
}

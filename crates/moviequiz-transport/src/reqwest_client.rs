//! `reqwest` implementation of the `NetworkClient` trait.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use moviequiz_core::error::NetworkError;
use moviequiz_core::network::{NetworkClient, check_response};

/// User agent sent with every request.
const USER_AGENT: &str = concat!("MovieQuiz/", env!("CARGO_PKG_VERSION"));

/// HTTP client that performs one GET per `fetch`, with no retries.
#[derive(Debug, Clone)]
pub struct ReqwestNetworkClient {
    client: reqwest::Client,
}

impl ReqwestNetworkClient {
    /// Creates a client whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` error if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an already configured `reqwest::Client`.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NetworkClient for ReqwestNetworkClient {
    #[instrument(skip(self))]
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, NetworkError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(error = %e, "request failed before a response arrived");
            NetworkError::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "non-success status");
            return Err(NetworkError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| NetworkError::Transport(format!("failed to read response body: {e}")))?;
        debug!(status = status.as_u16(), bytes = body.len(), "response received");

        check_response(status.as_u16(), body.to_vec())
    }
}

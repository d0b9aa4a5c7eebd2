//! Test network clients: scripted `NetworkClient` implementations.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use moviequiz_core::error::NetworkError;
use moviequiz_core::network::{NetworkClient, check_response};

/// A canned outcome for one URL.
#[derive(Debug, Clone)]
pub enum StubResponse {
    /// A response with the given status and body, classified exactly like a
    /// real HTTP response.
    Http {
        /// Status code.
        status: u16,
        /// Raw body bytes.
        body: Vec<u8>,
    },
    /// The request never produced a response.
    TransportError(String),
}

impl StubResponse {
    /// A 200 response with the given body.
    #[must_use]
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::Http {
            status: 200,
            body: body.into(),
        }
    }

    /// A response with the given status and an empty JSON object body.
    #[must_use]
    pub fn status(status: u16) -> Self {
        Self::Http {
            status,
            body: b"{}".to_vec(),
        }
    }
}

/// A network client that answers from a URL-keyed table and records every
/// requested URL. Unknown URLs yield a transport error.
#[derive(Debug, Default)]
pub struct StubNetworkClient {
    routes: HashMap<String, StubResponse>,
    requested: Mutex<Vec<String>>,
}

impl StubNetworkClient {
    /// Create an empty stub.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the response for `url`.
    #[must_use]
    pub fn with_route(mut self, url: impl Into<String>, response: StubResponse) -> Self {
        self.routes.insert(url.into(), response);
        self
    }

    /// Returns a snapshot of all URLs fetched so far, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn requested_urls(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl NetworkClient for StubNetworkClient {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, NetworkError> {
        self.requested.lock().unwrap().push(url.to_owned());
        match self.routes.get(url) {
            Some(StubResponse::Http { status, body }) => check_response(*status, body.clone()),
            Some(StubResponse::TransportError(message)) => {
                Err(NetworkError::Transport(message.clone()))
            }
            None => Err(NetworkError::Transport(format!("no route to {url}"))),
        }
    }
}

/// A network client that always fails at the transport level. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingNetworkClient;

#[async_trait]
impl NetworkClient for FailingNetworkClient {
    async fn fetch(&self, _url: &str) -> Result<Vec<u8>, NetworkError> {
        Err(NetworkError::Transport("connection refused".into()))
    }
}

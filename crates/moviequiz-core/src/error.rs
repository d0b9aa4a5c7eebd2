//! Error taxonomy shared by the transport, catalog, and question layers.

use thiserror::Error;

/// Failures produced by a single HTTP fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// The request never produced a response (DNS, timeout, reset, bad URL).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server answered with a status outside `200..300`.
    #[error("unexpected HTTP status {status}")]
    HttpStatus {
        /// The status code received.
        status: u16,
    },

    /// The server answered successfully but embedded an `errorMessage`.
    #[error("backend reported an error: {message}")]
    Application {
        /// The message found in the response body.
        message: String,
    },
}

/// Failures produced while loading the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The catalog request itself failed.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// The payload was malformed, missing fields, or held no items.
    #[error("catalog decode failure: {0}")]
    Decode(String),
}

/// Every failure the question service can report to its observer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// Network-level failure while fetching the catalog.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The catalog endpoint answered with a non-success status.
    #[error("unexpected HTTP status {0}")]
    HttpStatus(u16),

    /// The catalog endpoint signalled an error inside a 200 response.
    #[error("backend reported an error: {0}")]
    Application(String),

    /// The catalog payload was malformed or empty.
    #[error("catalog decode failure: {0}")]
    Decode(String),

    /// The image for a question could not be retrieved.
    #[error("failed to fetch image {url}: {cause}")]
    ImageFetch {
        /// Image URL that was requested.
        url: String,
        /// Underlying network failure.
        cause: NetworkError,
    },
}

impl From<NetworkError> for QuizError {
    fn from(err: NetworkError) -> Self {
        match err {
            NetworkError::Transport(message) => Self::Transport(message),
            NetworkError::HttpStatus { status } => Self::HttpStatus(status),
            NetworkError::Application { message } => Self::Application(message),
        }
    }
}

impl From<LoadError> for QuizError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::Network(inner) => inner.into(),
            LoadError::Decode(message) => Self::Decode(message),
        }
    }
}

//! MovieQuiz: driver error types.

use moviequiz_session::domain::error::SessionError;
use thiserror::Error;

/// Startup and runtime errors for the terminal driver.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Reading answers or writing prompts failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The round was driven out of order.
    #[error("session error: {0}")]
    Session(#[from] SessionError),
}

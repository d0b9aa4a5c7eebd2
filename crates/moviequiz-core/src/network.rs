//! Network client abstraction.
//!
//! Implementations perform exactly one GET per call and classify the
//! outcome with [`check_response`], so every client agrees on what counts as
//! a failure.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::NetworkError;

/// Body key the backend uses to signal errors inside successful responses.
pub const ERROR_MESSAGE_KEY: &str = "errorMessage";

/// Trait for anything that can fetch raw bytes from a URL.
#[async_trait]
pub trait NetworkClient: Send + Sync {
    /// Issues a single GET request against `url`.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError::Transport` when no response was received,
    /// `NetworkError::HttpStatus` for non-2xx statuses, and
    /// `NetworkError::Application` when the body carries an `errorMessage`.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, NetworkError>;
}

/// Classifies a received response.
///
/// The body is returned untouched on success; decoding it is the caller's
/// job.
///
/// # Errors
///
/// Returns `NetworkError::HttpStatus` for statuses outside `200..300` and
/// `NetworkError::Application` when the body is a JSON object holding a
/// non-empty `errorMessage` string.
pub fn check_response(status: u16, body: Vec<u8>) -> Result<Vec<u8>, NetworkError> {
    if !(200..300).contains(&status) {
        return Err(NetworkError::HttpStatus { status });
    }

    if let Some(message) = embedded_error(&body) {
        return Err(NetworkError::Application { message });
    }

    Ok(body)
}

fn embedded_error(body: &[u8]) -> Option<String> {
    // Non-JSON bodies (images) fall through untouched.
    let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(body) else {
        return None;
    };
    match map.get(ERROR_MESSAGE_KEY) {
        Some(Value::String(message)) if !message.is_empty() => Some(message.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_returns_raw_body() {
        let body = br#"{"items":[],"errorMessage":""}"#.to_vec();
        assert_eq!(check_response(200, body.clone()), Ok(body));
    }

    #[test]
    fn test_not_found_is_http_status_failure() {
        let result = check_response(404, b"{}".to_vec());
        assert_eq!(result, Err(NetworkError::HttpStatus { status: 404 }));
    }

    #[test]
    fn test_server_error_ignores_body() {
        let body = br#"{"errorMessage":"quota exceeded"}"#.to_vec();
        assert_eq!(
            check_response(500, body),
            Err(NetworkError::HttpStatus { status: 500 })
        );
    }

    #[test]
    fn test_redirect_status_is_failure() {
        assert_eq!(
            check_response(301, Vec::new()),
            Err(NetworkError::HttpStatus { status: 301 })
        );
    }

    #[test]
    fn test_error_message_in_ok_body_is_application_failure() {
        let body = br#"{"items":[],"errorMessage":"quota exceeded"}"#.to_vec();
        assert_eq!(
            check_response(200, body),
            Err(NetworkError::Application {
                message: "quota exceeded".to_owned()
            })
        );
    }

    #[test]
    fn test_missing_or_null_error_message_passes() {
        assert!(check_response(200, br#"{"items":[]}"#.to_vec()).is_ok());
        assert!(check_response(200, br#"{"errorMessage":null}"#.to_vec()).is_ok());
    }

    #[test]
    fn test_binary_body_passes() {
        let jpeg = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
        assert_eq!(check_response(200, jpeg.clone()), Ok(jpeg));
    }

    #[test]
    fn test_json_array_body_passes() {
        assert!(check_response(204, br#"[{"errorMessage":"x"}]"#.to_vec()).is_ok());
    }
}

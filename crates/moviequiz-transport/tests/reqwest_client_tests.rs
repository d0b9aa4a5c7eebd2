//! Integration tests for `ReqwestNetworkClient` against a local HTTP responder.

use std::net::SocketAddr;
use std::time::Duration;

use moviequiz_core::error::NetworkError;
use moviequiz_core::network::NetworkClient;
use moviequiz_transport::ReqwestNetworkClient;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serves exactly one canned HTTP response and returns the listening address.
async fn serve_once(status: u16, body: Vec<u8>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                return;
            }
            request.extend_from_slice(&chunk[..n]);
        }

        let head = format!(
            "HTTP/1.1 {status} Canned\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        socket.write_all(head.as_bytes()).await.unwrap();
        socket.write_all(&body).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    addr
}

fn client() -> ReqwestNetworkClient {
    ReqwestNetworkClient::new(Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_fetch_returns_raw_body_on_success() {
    let body = br#"{"items":[{"id":"tt1"}],"errorMessage":""}"#.to_vec();
    let addr = serve_once(200, body.clone()).await;

    let fetched = client().fetch(&format!("http://{addr}/catalog")).await;

    assert_eq!(fetched, Ok(body));
}

#[tokio::test]
async fn test_fetch_maps_404_to_http_status() {
    let addr = serve_once(404, br#"{"items":[]}"#.to_vec()).await;

    let result = client().fetch(&format!("http://{addr}/missing")).await;

    assert_eq!(result, Err(NetworkError::HttpStatus { status: 404 }));
}

#[tokio::test]
async fn test_fetch_maps_500_to_http_status() {
    let addr = serve_once(500, b"internal".to_vec()).await;

    let result = client().fetch(&format!("http://{addr}/")).await;

    assert_eq!(result, Err(NetworkError::HttpStatus { status: 500 }));
}

#[tokio::test]
async fn test_fetch_detects_error_message_in_ok_body() {
    let addr = serve_once(200, br#"{"items":[],"errorMessage":"quota exceeded"}"#.to_vec()).await;

    let result = client().fetch(&format!("http://{addr}/")).await;

    assert_eq!(
        result,
        Err(NetworkError::Application {
            message: "quota exceeded".to_owned()
        })
    );
}

#[tokio::test]
async fn test_fetch_passes_binary_bodies_through() {
    let jpeg = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];
    let addr = serve_once(200, jpeg.clone()).await;

    let result = client().fetch(&format!("http://{addr}/poster.jpg")).await;

    assert_eq!(result, Ok(jpeg));
}

#[tokio::test]
async fn test_fetch_reports_refused_connection_as_transport_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = client().fetch(&format!("http://{addr}/")).await;

    assert!(matches!(result, Err(NetworkError::Transport(_))));
}

#[tokio::test]
async fn test_fetch_reports_timeout_as_transport_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let silent = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;
        drop(socket);
    });

    let client = ReqwestNetworkClient::new(Duration::from_millis(200)).unwrap();
    let result = client.fetch(&format!("http://{addr}/")).await;

    assert!(matches!(result, Err(NetworkError::Transport(_))));
    silent.abort();
}

#[tokio::test]
async fn test_fetch_rejects_malformed_url_as_transport_failure() {
    let result = client().fetch("not a url").await;

    assert!(matches!(result, Err(NetworkError::Transport(_))));
}

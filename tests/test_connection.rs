//! End-to-end tests over real sockets: one Connection per accepted stream,
//! exactly like the accept loop drives it.

use std::time::{Duration, Instant};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use snooze::http::connection::Connection;
use snooze::http::reader::READ_CAPACITY;

const DEFAULT_MESSAGE: &str = "Hello from snooze!\n";

async fn serve_one() -> (TcpStream, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let (socket, _peer) = listener.accept().await.unwrap();
        Connection::new(socket, DEFAULT_MESSAGE.to_string())
            .run()
            .await;
    });

    let client = TcpStream::connect(addr).await.unwrap();
    (client, server)
}

async fn roundtrip(request: &[u8]) -> String {
    let (mut client, server) = serve_one().await;

    client.write_all(request).await.unwrap();
    let mut response = Vec::new();
    client.read_to_end(&mut response).await.unwrap();
    server.await.unwrap();

    String::from_utf8_lossy(&response).into_owned()
}

fn body_of(response: &str) -> &str {
    let start = response.find("\r\n\r\n").expect("no header terminator") + 4;
    &response[start..]
}

#[tokio::test]
async fn test_default_route_returns_configured_message() {
    let response = roundtrip(b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n").await;

    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert_eq!(body_of(&response), DEFAULT_MESSAGE);
}

#[tokio::test]
async fn test_snooze_route_body_and_delay() {
    let started = Instant::now();
    let response = roundtrip(b"GET /snooze/1 HTTP/1.1\r\nHost: localhost\r\n\r\n").await;

    assert!(started.elapsed() >= Duration::from_secs(1));
    assert_eq!(body_of(&response), "Snoozed for 1 seconds!\n");
}

#[tokio::test]
async fn test_snooze_zero_responds_immediately() {
    let started = Instant::now();
    let response = roundtrip(b"GET /snooze/0 HTTP/1.1\r\n\r\n").await;

    assert!(started.elapsed() < Duration::from_secs(1));
    assert_eq!(body_of(&response), "Snoozed for 0 seconds!\n");
}

#[tokio::test]
async fn test_near_miss_snooze_paths_fall_through_to_default() {
    for path in ["/snooze/", "/snooze/12a", "/snooze/-3", "/snooze"] {
        let request = format!("GET {} HTTP/1.1\r\nHost: x\r\n\r\n", path);
        let response = roundtrip(request.as_bytes()).await;
        assert_eq!(body_of(&response), DEFAULT_MESSAGE, "path {path}");
    }
}

#[tokio::test]
async fn test_content_length_matches_body() {
    let response = roundtrip(b"GET / HTTP/1.1\r\n\r\n").await;

    let expected = format!("Content-Length: {}\r\n", DEFAULT_MESSAGE.len());
    assert!(response.contains(&expected));
    assert!(response.contains("Connection: close\r\n"));
}

#[tokio::test]
async fn test_malformed_request_line_still_gets_default_response() {
    let response = roundtrip(b"GARBAGE\r\nSome: header\r\n\r\n").await;

    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert_eq!(body_of(&response), DEFAULT_MESSAGE);
}

#[tokio::test]
async fn test_request_body_is_ignored() {
    let response =
        roundtrip(b"POST /snooze/0 HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello").await;

    assert_eq!(body_of(&response), "Snoozed for 0 seconds!\n");
}

#[tokio::test]
async fn test_zero_byte_client_close_gets_no_response() {
    let (mut client, server) = serve_one().await;

    // Close the write side without sending anything.
    client.shutdown().await.unwrap();

    let mut response = Vec::new();
    client.read_to_end(&mut response).await.unwrap();
    server.await.unwrap();

    assert!(response.is_empty());
}

#[tokio::test]
async fn test_unterminated_headers_hit_capacity_and_still_answer() {
    let (mut client, server) = serve_one().await;

    // More than the read ceiling, never a CRLFCRLF. The server must stop at
    // capacity, respond with defaults, drain, and close.
    let flood = vec![b'X'; READ_CAPACITY + 512];
    client.write_all(&flood).await.unwrap();

    let mut response = Vec::new();
    client.read_to_end(&mut response).await.unwrap();
    server.await.unwrap();

    let response = String::from_utf8_lossy(&response);
    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert_eq!(body_of(&response), DEFAULT_MESSAGE);
}

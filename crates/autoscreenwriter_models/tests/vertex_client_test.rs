//! Vertex client against a local HTTP server with canned responses.

use autoscreenwriter_core::{Creativity, GenerationConfig, Prompt};
use autoscreenwriter_error::StreamErrorKind;
use autoscreenwriter_models::{
    GenerativeModel, TEXT_MODEL, VertexClient, VertexConfig, generate_text_response,
    story_request,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

const HELLO: &str = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Hello"}]}}]}"#;
const BLOCKED: &str = r#"{"candidates":[{"finishReason":"SAFETY"}]}"#;
const WORLD: &str = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"world"}]}}],"usageMetadata":{"promptTokenCount":3,"candidatesTokenCount":2,"totalTokenCount":5}}"#;

/// Read one request: headers, then as much body as `content-length` says.
async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.expect("Read request");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
        let body_len = headers
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if buf.len() >= header_end + 4 + body_len {
            break;
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Serve `response` to the first connection and hand back the request it got.
async fn serve_once(response: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("Bind listener");
    let addr = listener.local_addr().expect("Local address");
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("Accept connection");
        let request = read_request(&mut socket).await;
        socket
            .write_all(response.as_bytes())
            .await
            .expect("Write response");
        socket.shutdown().await.expect("Shutdown socket");
        request
    });
    (format!("http://{}", addr), handle)
}

fn http_response(status: &str, content_type: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status}\r\ncontent-type: {content_type}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    )
}

fn client(endpoint: String) -> VertexClient {
    let config = VertexConfig::builder()
        .project("demo")
        .region("us-central1")
        .access_token("secret-token")
        .api_endpoint(Some(endpoint))
        .build()
        .expect("Valid config");
    VertexClient::new(&config, TEXT_MODEL).expect("Client builds")
}

fn prompt() -> (Prompt, GenerationConfig) {
    (
        Prompt::from("Write a short story.".to_string()),
        GenerationConfig::for_creativity(Creativity::Low),
    )
}

#[tokio::test]
async fn test_sse_body_aggregates_with_placeholder() {
    let body = format!("data: {HELLO}\r\n\r\ndata: {BLOCKED}\r\n\r\ndata: {WORLD}\r\n\r\n");
    let (endpoint, server) = serve_once(http_response("200 OK", "text/event-stream", &body)).await;
    let client = client(endpoint);
    let (prompt, config) = prompt();

    let response = generate_text_response(&client, &prompt, config)
        .await
        .expect("Stream succeeds");

    assert_eq!(response.text(), "Hello  world");
    assert_eq!(*response.chunks(), 3);
    assert_eq!(*response.failed_chunks(), 1);

    let request = server.await.expect("Server task");
    assert!(request.starts_with(
        "POST /v1/projects/demo/locations/us-central1/publishers/google/models/gemini-1.0-pro:streamGenerateContent?alt=sse HTTP/1.1"
    ));
    assert!(request.to_ascii_lowercase().contains("authorization: bearer secret-token"));
    assert!(request.contains(r#""text":"Write a short story.""#));
    assert!(request.contains(r#""temperature":0.3"#));
    assert!(request.contains("HARM_CATEGORY_DANGEROUS_CONTENT"));
}

#[tokio::test]
async fn test_error_status_is_http_status() {
    let (endpoint, server) =
        serve_once(http_response("403 Forbidden", "text/plain", "denied")).await;
    let client = client(endpoint);
    let (prompt, config) = prompt();

    let err = client
        .stream_generate_content(&story_request(&prompt, config))
        .await
        .err()
        .expect("403 is an error");

    assert_eq!(
        err.kind(),
        &StreamErrorKind::HttpStatus {
            status_code: 403,
            message: "denied".into(),
        }
    );
    server.await.expect("Server task");
}

#[tokio::test]
async fn test_truncated_body_is_transport_error() {
    let body = format!("data: {HELLO}\r\n\r\n");
    let response = format!(
        "HTTP/1.1 200 OK\r\ncontent-type: text/event-stream\r\ncontent-length: {}\r\n\r\n{body}",
        body.len() + 100
    );
    let (endpoint, server) = serve_once(response).await;
    let client = client(endpoint);
    let (prompt, config) = prompt();

    let err = generate_text_response(&client, &prompt, config)
        .await
        .expect_err("Truncated body fails the stream");

    assert!(
        matches!(err.kind(), StreamErrorKind::Transport(message) if message.starts_with("Body read failed")),
        "unexpected error: {err}"
    );
    server.await.expect("Server task");
}

#[tokio::test]
async fn test_unreadable_error_body_is_reported() {
    let response = "HTTP/1.1 500 Internal Server Error\r\ncontent-type: text/plain\r\ncontent-length: 100\r\n\r\noops"
        .to_string();
    let (endpoint, server) = serve_once(response).await;
    let client = client(endpoint);
    let (prompt, config) = prompt();

    let err = client
        .stream_generate_content(&story_request(&prompt, config))
        .await
        .err()
        .expect("500 is an error");

    match err.kind() {
        StreamErrorKind::HttpStatus {
            status_code,
            message,
        } => {
            assert_eq!(*status_code, 500);
            assert!(message.starts_with("<failed to read error body:"), "{message}");
        }
        other => panic!("Expected HttpStatus, got {other}"),
    }
    server.await.expect("Server task");
}

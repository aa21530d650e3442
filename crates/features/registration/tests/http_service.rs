#![cfg(feature = "http")]

use mfit_domain::config::ApiConfig;
use mfit_registration::{
    HttpRegistrationService, RegistrationError, RegistrationPayload, RegistrationService,
};
use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

fn payload() -> RegistrationPayload {
    RegistrationPayload {
        name: "Al".to_owned(),
        email: "a@b.com".to_owned(),
        password: "secret".to_owned(),
        phone: "5551234567".to_owned(),
    }
}

/// Serves exactly one request with `status` and `body`, returning the raw request.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let base_url = format!("http://{}", listener.local_addr().expect("addr"));

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.expect("read");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if request_complete(&request) {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.expect("write");
        socket.shutdown().await.ok();
        String::from_utf8(request).expect("utf8 request")
    });

    (base_url, handle)
}

fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some((head, body)) = text.split_once("\r\n\r\n") else { return false };
    let length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length").then(|| value.trim().parse::<usize>().ok())?
        })
        .unwrap_or(0);
    body.len() >= length
}

fn service(base_url: String) -> HttpRegistrationService {
    let api = ApiConfig { base_url, ..ApiConfig::default() };
    HttpRegistrationService::new(&api).expect("client")
}

#[tokio::test]
async fn posts_camel_case_json_to_the_register_path() {
    let (base_url, server) = serve_once("201 Created", "{}").await;

    service(base_url).register(&payload()).await.expect("accepted");

    let request = server.await.expect("server task");
    assert!(request.starts_with("POST /api/auth/register HTTP/1.1"), "got {request}");
    let (_, body) = request.split_once("\r\n\r\n").expect("body");
    let body: Value = serde_json::from_str(body).expect("json body");
    assert_eq!(
        body,
        json!({ "name": "Al", "email": "a@b.com", "password": "secret", "phone": "5551234567" })
    );
}

#[tokio::test]
async fn rejection_carries_the_server_message() {
    let (base_url, server) =
        serve_once("409 Conflict", r#"{"message":"Email already in use","code":"EMAIL_TAKEN"}"#).await;

    let err = service(base_url).register(&payload()).await.unwrap_err();
    server.await.expect("server task");

    assert!(matches!(err, RegistrationError::Rejected { status: 409, .. }));
    assert_eq!(err.server_message(), Some("Email already in use"));
}

#[tokio::test]
async fn rejection_without_json_has_no_message() {
    let (base_url, server) = serve_once("500 Internal Server Error", "oops").await;

    let err = service(base_url).register(&payload()).await.unwrap_err();
    server.await.expect("server task");

    assert!(matches!(err, RegistrationError::Rejected { status: 500, message: None, .. }));
    assert_eq!(err.server_message(), None);
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let base_url = format!("http://{}", listener.local_addr().expect("addr"));
    drop(listener);

    let err = service(base_url).register(&payload()).await.unwrap_err();

    assert!(matches!(err, RegistrationError::Transport { .. }), "got {err}");
    assert_eq!(err.server_message(), None);
}

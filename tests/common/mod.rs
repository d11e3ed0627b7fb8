//! Shared utilities for integration testing.

use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use trending_client::{ClientConfig, MemoryPage, RequestRunner};

/// What the analyze backend saw for one request.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub content_type: Option<String>,
    pub request_id: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct BackendState {
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
    slow_delay: Duration,
}

async fn analyze(
    State(state): State<BackendState>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<Value> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let keyword = body["keyword"].as_str().unwrap_or_default().to_string();

    state.captured.lock().unwrap().push(CapturedRequest {
        content_type: header("content-type"),
        request_id: header("x-request-id"),
        body,
    });

    if keyword.starts_with("slow") {
        tokio::time::sleep(state.slow_delay).await;
    }
    Json(json!({ "result": format!("<b>{}</b>", keyword) }))
}

/// Start an axum `/analyze` backend that answers `<b>{keyword}</b>`.
///
/// Keywords starting with "slow" are answered after `slow_delay`.
pub async fn start_analyze_backend(
    slow_delay: Duration,
) -> (SocketAddr, Arc<Mutex<Vec<CapturedRequest>>>) {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let state = BackendState {
        captured: captured.clone(),
        slow_delay,
    };
    let app = Router::new()
        .route("/analyze", post(analyze))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (addr, captured)
}

/// Read one HTTP/1.1 request (headers plus Content-Length body).
async fn drain_request(socket: &mut TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);

        let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
        let content_length = head
            .lines()
            .find_map(|l| l.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if buf.len() >= header_end + 4 + content_length {
            return;
        }
    }
}

/// Start a programmable raw-TCP backend; `f` picks status and body per request.
#[allow(dead_code)]
pub async fn start_programmable_backend<F, Fut>(f: F) -> SocketAddr
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        drain_request(&mut socket).await;
                        let (status, body) = f().await;
                        let status_text = match status {
                            200 => "200 OK",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });
    addr
}

#[allow(dead_code)]
pub fn config_for(addr: SocketAddr, request_ms: u64) -> ClientConfig {
    let mut config = ClientConfig::default();
    config.endpoint.base_url = format!("http://{}", addr);
    config.timeouts.request_ms = request_ms;
    config.timeouts.connect_ms = request_ms.min(2_000);
    config
}

pub fn runner_for(addr: SocketAddr, request_ms: u64, memory: &MemoryPage) -> Arc<RequestRunner> {
    Arc::new(RequestRunner::from_config(&config_for(addr, request_ms), memory.page()).unwrap())
}

//! Stand-in analysis server for trying the client locally.
//!
//! `cargo run --example mock_analyze` then
//! `cargo run -- --keyword rust --endpoint http://127.0.0.1:5000`.
//! The keyword `fail` returns a server-side error fragment, `slow` never
//! answers within the client's default deadline.

use axum::{routing::post, Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::time::Duration;

async fn analyze(Json(body): Json<Value>) -> Json<Value> {
    let keyword = body.get("keyword").and_then(Value::as_str).unwrap_or_default();
    let period = body.get("period").and_then(Value::as_str).unwrap_or_default();
    println!("Received analyze request: keyword={}, period={}", keyword, period);

    match keyword {
        "fail" => Json(json!({ "result": "<b>Error:</b> upstream feeds unavailable" })),
        "slow" => {
            tokio::time::sleep(Duration::from_secs(90)).await;
            Json(json!({ "result": "<b>No trending posts found.</b>" }))
        }
        _ => {
            let items: String = (1..=3)
                .map(|i| {
                    format!(
                        "<div><h4>{i}. {keyword} story {i}</h4><p>Source: <b>Demo</b> | Period: {period} | Influence Score: {}</p></div>",
                        100 / i
                    )
                })
                .collect();
            Json(json!({ "result": format!("<div><h2>Trending Topics</h2>{items}</div>") }))
        }
    }
}

#[tokio::main]
async fn main() {
    let app = Router::new().route("/analyze", post(analyze));

    let addr = SocketAddr::from(([127, 0, 0, 1], 5000));
    println!("Mock analysis server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

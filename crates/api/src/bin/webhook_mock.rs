//! Development webhook receiver.
//!
//! Logs every payload POSTed to /webhook and returns 200. Point the
//! server at it with `GA__WEBHOOK__URL=http://localhost:9090/webhook`
//! to watch dispatches locally.

use anyhow::Result;
use axum::{routing::post, Json, Router};
use tracing::info;

async fn receive(Json(payload): Json<serde_json::Value>) -> &'static str {
    info!(payload = %payload, "Webhook received");
    "ok"
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let port = std::env::var("WEBHOOK_MOCK_PORT").unwrap_or_else(|_| "9090".to_string());
    let addr = format!("0.0.0.0:{port}");

    let app = Router::new().route("/webhook", post(receive));

    info!("Webhook mock listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

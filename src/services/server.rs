//! The HTTP backend: a liveness probe and the tool catalog.

use crate::domain::catalog;
use axum::{response::IntoResponse, routing::get, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router() -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/tools", get(tools))
        .layer(TraceLayer::new_for_http())
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub async fn tools() -> impl IntoResponse {
    Json(json!({ "tools": catalog::all_tools() }))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

/// `host` may be an IP literal or a name such as `localhost`.
pub async fn bind(host: &str, port: u16) -> anyhow::Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind((host, port))
        .await
        .map_err(|e| anyhow::anyhow!("cannot bind {}:{}: {}", host, port, e))
}

pub async fn serve(host: &str, port: u16) -> anyhow::Result<()> {
    let listener = bind(host, port).await?;
    let local = listener.local_addr()?;
    info!("WebToolKit server listening on {}", local);
    println!("listening on http://{}", local);

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

//! Shared test utilities.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use mockapi::fault::FaultMode;
use mockapi::server::router::build_router;
use mockapi::server::AppState;
use std::net::SocketAddr;
use std::time::Duration;
use tower::ServiceExt;

/// Router plus a handle on its state, so tests can inspect the toggle.
pub fn test_app(mode: FaultMode) -> (Router, AppState) {
    let state = AppState::new(mode);
    (build_router(state.clone()), state)
}

/// Send one request through the router and decode the JSON body.
pub async fn send(app: &Router, method: Method, path: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("non-JSON body for {}: {} ({:?})", path, e, bytes));
    (status, json)
}

pub async fn get(app: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    send(app, Method::GET, path).await
}

pub async fn post(app: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    send(app, Method::POST, path).await
}

/// Wait for a server to become available.
pub async fn wait_for_server(addr: SocketAddr, timeout: Duration) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}

//! Request-level middleware: tracing with request ids, and the JSON
//! envelope guarantee for responses axum generates on its own.

use std::time::Instant;

use axum::body::Body;
use axum::extract::Request;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::Instrument;
use uuid::Uuid;

use crate::server::error::ApiError;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Tags each request with a UUID, logs one line per completed request and
/// echoes the id back in `x-request-id`.
pub async fn trace_requests(req: Request<Body>, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let span = tracing::info_span!("request", id = %request_id);
    let start = Instant::now();

    let mut response = next.run(req).instrument(span.clone()).await;

    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis() as u64;
    span.in_scope(|| {
        if status.is_server_error() {
            tracing::warn!(%method, %path, status = status.as_u16(), elapsed_ms, "request completed");
        } else {
            tracing::info!(%method, %path, status = status.as_u16(), elapsed_ms, "request completed");
        }
    });

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }
    response
}

/// Rewrites axum's bare 405 into the `Endpoint not found` envelope so a
/// wrong method looks the same as an unknown path.
pub async fn enforce_envelope(req: Request<Body>, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        return ApiError::RouteNotFound { method, path }.into_response();
    }
    response
}

use std::any::Any;

use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;

use crate::server::error::ApiError;
use crate::server::handlers;
use crate::server::middleware::{enforce_envelope, trace_requests};
use crate::server::AppState;

/// Build the full route table with middleware applied.
pub fn build_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health))
        .route("/error/enable", post(handlers::enable_error))
        .route("/error/disable", post(handlers::disable_error))
        .route("/error/status", get(handlers::error_status))
        .route("/trigger-error", get(handlers::trigger_error))
        .route("/api/data", get(handlers::list_data))
        .route("/api/data/{id}", get(handlers::get_data_item))
        .fallback(handlers::not_found);

    with_middleware(routes).with_state(state)
}

/// Wrap routes in the shared layer stack.
///
/// Innermost first: panic recovery, the envelope rewrite, then request
/// tracing, so the trace line sees the final status.
pub fn with_middleware<S>(routes: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    routes
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(enforce_envelope))
        .layer(middleware::from_fn(trace_requests))
}

/// Turns a handler panic into the generic 500 envelope.
fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal(format!("handler panicked: {}", detail)).into_response()
}

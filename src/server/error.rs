//! Error types and response handling for the API server.
//!
//! Every failure is rendered as a JSON envelope of the form
//! `{"error": "<message>"}`. Server-side failures always use the generic
//! message so internals never leak into responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

pub const ITEM_NOT_FOUND: &str = "Item not found";
pub const ENDPOINT_NOT_FOUND: &str = "Endpoint not found";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Errors a handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No record with the requested id
    #[error("Item {id} not found")]
    NotFound { id: String },

    /// No route for this method and path
    #[error("No route for {method} {path}")]
    RouteNotFound { method: String, path: String },

    /// Deliberate failure from the fault-injection switch
    #[error("Injected fault triggered")]
    InjectedFault,

    /// Anything else that went wrong inside a handler
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Map error variant to the HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InjectedFault => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the response envelope
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => ITEM_NOT_FOUND,
            ApiError::RouteNotFound { .. } => ENDPOINT_NOT_FOUND,
            ApiError::InjectedFault | ApiError::Internal(_) => INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal(_) => tracing::error!(error = %self, "request failed"),
            ApiError::InjectedFault => tracing::warn!(error = %self, "request failed"),
            _ => tracing::debug!(error = %self, "request rejected"),
        }

        let body = Json(serde_json::json!({ "error": self.public_message() }));
        (self.status_code(), body).into_response()
    }
}

//! Request handlers.
//!
//! Each handler is a thin composition over [`DataStore`](crate::store::DataStore)
//! and [`FaultToggle`](crate::fault::FaultToggle) pulled from [`AppState`].

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::{Method, Uri};
use axum::Json;
use serde::Serialize;

use crate::fault::FaultMode;
use crate::server::error::ApiError;
use crate::server::AppState;
use crate::store::Record;

const TRIGGER_PREFIX: &str = "Error triggered successfully";
const TRIGGER_SUFFIX: &str = " - This was the intentional error";

/// Local wall-clock time in ISO-8601 without offset.
pub fn timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub message: String,
    pub timestamp: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
}

/// Reply to an enable/disable call and to a disabled trigger.
#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub message: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct FaultStatus {
    pub error_enabled: bool,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct TriggerResult {
    pub result: String,
}

#[derive(Debug, Serialize)]
pub struct DataListing {
    pub data: Vec<Record>,
    pub timestamp: String,
}

/// Either outcome of `/trigger-error` that isn't a failure.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum TriggerResponse {
    Result(TriggerResult),
    Disabled(ToggleResponse),
}

pub async fn home(State(state): State<AppState>) -> Json<ServerInfo> {
    Json(ServerInfo {
        message: "Mock API server is running!".to_string(),
        timestamp: timestamp(),
        version: state.version.to_string(),
    })
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        timestamp: timestamp(),
    })
}

pub async fn enable_error(State(state): State<AppState>) -> Json<ToggleResponse> {
    state.fault.enable();
    Json(ToggleResponse {
        message: "Error generation enabled".to_string(),
        status: "enabled".to_string(),
    })
}

pub async fn disable_error(State(state): State<AppState>) -> Json<ToggleResponse> {
    state.fault.disable();
    Json(ToggleResponse {
        message: "Error generation disabled".to_string(),
        status: "disabled".to_string(),
    })
}

pub async fn error_status(State(state): State<AppState>) -> Json<FaultStatus> {
    Json(FaultStatus {
        error_enabled: state.fault.status(),
        timestamp: timestamp(),
    })
}

pub async fn trigger_error(
    State(state): State<AppState>,
) -> Result<Json<TriggerResponse>, ApiError> {
    if !state.fault.status() {
        return Ok(Json(TriggerResponse::Disabled(ToggleResponse {
            message: "Error generation is disabled. Enable it first with POST /error/enable"
                .to_string(),
            status: "disabled".to_string(),
        })));
    }

    match state.fault_mode {
        FaultMode::Inject => Err(ApiError::InjectedFault),
        FaultMode::Resolve => Ok(Json(TriggerResponse::Result(TriggerResult {
            result: format!("{}{}", TRIGGER_PREFIX, TRIGGER_SUFFIX),
        }))),
    }
}

pub async fn list_data(State(state): State<AppState>) -> Json<DataListing> {
    Json(DataListing {
        data: state.store.list().to_vec(),
        timestamp: timestamp(),
    })
}

/// Non-numeric ids are a routing miss, not a validation error.
pub async fn get_data_item(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
    method: Method,
    uri: Uri,
) -> Result<Json<Record>, ApiError> {
    let route_miss = || ApiError::RouteNotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    };
    let Ok(Path(raw_id)) = raw_id else {
        return Err(route_miss());
    };
    let id = parse_item_id(&raw_id).ok_or_else(route_miss)?;

    id.and_then(|id| state.store.get(id))
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound { id: raw_id })
}

/// Accepts only plain ASCII digits.
///
/// Returns `None` for anything that is not an integer segment, and
/// `Some(None)` for digit strings too large for any stored id.
fn parse_item_id(raw: &str) -> Option<Option<u64>> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(raw.parse().ok())
}

pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::RouteNotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

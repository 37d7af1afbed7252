//! Health check endpoint handler.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use intake_store::PatientStorage;
use tracing::debug;

use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// Runs a trivial statement through the connection pool so load balancers
/// see pool exhaustion and database loss, not just process liveness.
///
/// # Response
///
/// - `200 OK` - store reachable
/// - `503 Service Unavailable` - store unreachable
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> Response
where
    S: PatientStorage,
{
    debug!("Processing health check request");

    match state.store().health_check().await {
        Ok(()) => {
            let body = serde_json::json!({
                "status": "healthy",
                "backend": state.store().backend_name(),
            });
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => {
            let body = serde_json::json!({
                "status": "unhealthy",
                "error": err.to_string(),
            });
            (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
        }
    }
}

//! Doctor lookup handler: `GET /api/doctors`.

use axum::{Json, extract::State};
use intake_store::{Doctor, PatientStorage};
use tracing::{debug, warn};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Returns every doctor reference row for client-side dropdowns.
///
/// The doctors table is populated by an external collaborator; this
/// endpoint is strictly read-only and projects only id + email.
///
/// # Response
///
/// - `200 OK` - JSON array of `{"id", "email"}`
/// - `500 Internal Server Error` - store failure
pub async fn list_doctors_handler<S>(
    State(state): State<AppState<S>>,
) -> ApiResult<Json<Vec<Doctor>>>
where
    S: PatientStorage,
{
    let doctors = state.store().list_doctors().await.map_err(|err| {
        warn!(error = %err, "Doctor lookup failed");
        ApiError::Internal {
            message: "Failed to fetch doctors".to_string(),
            details: None,
        }
    })?;

    debug!(count = doctors.len(), "Listed doctors");

    Ok(Json(doctors))
}

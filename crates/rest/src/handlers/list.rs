//! List handler: `GET /api/patients`.

use axum::{Json, extract::State};
use intake_store::{Patient, PatientStorage};
use tracing::debug;

use crate::error::ApiResult;
use crate::state::AppState;

/// Returns every patient record in store order.
///
/// # Response
///
/// - `200 OK` - JSON array of records; optional fields that were never
///   submitted serialize as `null`
/// - `500 Internal Server Error` - store failure
pub async fn list_patients_handler<S>(
    State(state): State<AppState<S>>,
) -> ApiResult<Json<Vec<Patient>>>
where
    S: PatientStorage,
{
    let patients = state.store().list_patients().await?;

    debug!(count = patients.len(), "Listed patient records");

    Ok(Json(patients))
}

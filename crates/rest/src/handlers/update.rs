//! Update handler: `PUT /api/patients/{id}`.

use axum::{
    Json,
    extract::{Path, State},
};
use intake_store::PatientStorage;
use serde_json::{Value, json};
use tracing::debug;

use crate::error::ApiResult;
use crate::payload::PatientPayload;
use crate::state::AppState;

/// Replaces all mutable fields of the identified patient record.
///
/// The payload shape matches create except that `doctor` is ignored:
/// doctor assignment stays a create-time decision. Replacement is
/// wholesale; there is no partial patch and no concurrency check, so
/// concurrent updates race last-write-wins.
///
/// # Response
///
/// - `200 OK` - `{"message": "Patient updated"}`
/// - `400 Bad Request` - payload failed validation
/// - `404 Not Found` - no record matched the identifier
/// - `500 Internal Server Error` - store failure
pub async fn update_patient_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
    Json(payload): Json<PatientPayload>,
) -> ApiResult<Json<Value>>
where
    S: PatientStorage,
{
    let update = payload.into_update()?;

    debug!(id, "Processing patient update request");

    state.store().update_patient(id, update).await?;

    debug!(id, "Patient updated");

    Ok(Json(json!({ "message": "Patient updated" })))
}

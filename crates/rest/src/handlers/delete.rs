//! Delete handler: `DELETE /api/patients/{id}`.

use axum::{
    Json,
    extract::{Path, State},
};
use intake_store::PatientStorage;
use serde_json::{Value, json};
use tracing::debug;

use crate::error::ApiResult;
use crate::state::AppState;

/// Deletes the identified patient record.
///
/// # Response
///
/// - `200 OK` - `{"message": "Patient deleted"}`
/// - `404 Not Found` - no record matched the identifier (a second delete
///   of the same id therefore returns 404, not 200)
/// - `500 Internal Server Error` - store failure
pub async fn delete_patient_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>>
where
    S: PatientStorage,
{
    debug!(id, "Processing patient delete request");

    state.store().delete_patient(id).await?;

    debug!(id, "Patient deleted");

    Ok(Json(json!({ "message": "Patient deleted" })))
}

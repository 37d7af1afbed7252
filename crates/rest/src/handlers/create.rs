//! Create handler: `POST /api/patients`.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use intake_store::{PatientStorage, StoreError};
use tracing::{debug, warn};

use crate::error::{ApiError, ApiResult};
use crate::payload::PatientPayload;
use crate::state::AppState;

/// Creates a new patient record. The store assigns the identifier.
///
/// # Request
///
/// JSON body with `name`, `age`, `gender` required; `time`, `location`,
/// `severity`, `bodyPart`, `description`, `requiredAction`, `doctor`
/// optional. `time` is normalized to the store's timestamp shape.
///
/// # Response
///
/// - `201 Created` - `{"id": <assigned id>}`
/// - `400 Bad Request` - missing required field, invalid severity,
///   unparseable time, or unknown doctor reference
/// - `500 Internal Server Error` - `{"error", "details"}` where `details`
///   carries the store diagnostic for operators
pub async fn create_patient_handler<S>(
    State(state): State<AppState<S>>,
    Json(payload): Json<PatientPayload>,
) -> ApiResult<Response>
where
    S: PatientStorage,
{
    let draft = payload.into_draft()?;

    debug!(name = %draft.name, "Processing patient create request");

    let id = state
        .store()
        .create_patient(draft)
        .await
        .map_err(|err| match err {
            StoreError::UnknownDoctor { .. } => ApiError::from(err),
            err => {
                warn!(error = %err, "Patient insert failed");
                ApiError::Internal {
                    message: "Failed to save patient".to_string(),
                    details: Some(err.to_string()),
                }
            }
        })?;

    debug!(id, "Patient created");

    Ok((StatusCode::CREATED, Json(serde_json::json!({ "id": id }))).into_response())
}

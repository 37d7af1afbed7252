//! Intake API route configuration.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use intake_store::PatientStorage;

use crate::handlers;
use crate::state::AppState;

/// Creates all intake API routes.
///
/// # Routes
///
/// - `GET /health` - Health check
/// - `GET /api/patients` - List patient records
/// - `POST /api/patients` - Create a patient record
/// - `PUT /api/patients/{id}` - Replace a patient record's fields
/// - `DELETE /api/patients/{id}` - Delete a patient record
/// - `GET /api/doctors` - List doctor reference rows
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: PatientStorage + 'static,
{
    Router::new()
        .route("/health", get(handlers::health_handler::<S>))
        .route("/api/patients", get(handlers::list_patients_handler::<S>))
        .route("/api/patients", post(handlers::create_patient_handler::<S>))
        .route(
            "/api/patients/{id}",
            put(handlers::update_patient_handler::<S>),
        )
        .route(
            "/api/patients/{id}",
            delete(handlers::delete_patient_handler::<S>),
        )
        .route("/api/doctors", get(handlers::list_doctors_handler::<S>))
        .with_state(state)
}

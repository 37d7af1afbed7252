//! The storage trait consumed by the HTTP layer.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::types::{Doctor, Patient, PatientDraft, PatientUpdate};

/// Storage operations for patient intake records.
///
/// Every method is a single-statement operation with no cross-record
/// transaction semantics. Implementations must release their connection on
/// every exit path, including failures.
#[async_trait]
pub trait PatientStorage: Send + Sync {
    /// Returns a short name identifying the backend (e.g. "sqlite").
    fn backend_name(&self) -> &'static str;

    /// Returns all patient records in store order (insertion order).
    async fn list_patients(&self) -> StoreResult<Vec<Patient>>;

    /// Inserts a new patient record and returns the assigned identifier.
    ///
    /// When the draft carries a doctor reference, it is validated against
    /// the doctors table before the insert; an unknown reference fails with
    /// [`StoreError::UnknownDoctor`](crate::StoreError::UnknownDoctor).
    async fn create_patient(&self, draft: PatientDraft) -> StoreResult<i64>;

    /// Replaces all mutable fields of the identified record.
    ///
    /// Fails with [`StoreError::NotFound`](crate::StoreError::NotFound)
    /// when no row matched the identifier.
    async fn update_patient(&self, id: i64, update: PatientUpdate) -> StoreResult<()>;

    /// Deletes the identified record.
    ///
    /// Fails with [`StoreError::NotFound`](crate::StoreError::NotFound)
    /// when no row matched the identifier.
    async fn delete_patient(&self, id: i64) -> StoreResult<()>;

    /// Returns all doctor reference rows (id + email projection).
    async fn list_doctors(&self) -> StoreResult<Vec<Doctor>>;

    /// Verifies the backend is reachable.
    async fn health_check(&self) -> StoreResult<()>;
}

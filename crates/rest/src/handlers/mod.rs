//! HTTP request handlers for the intake API.
//!
//! - [`list`] - List all patient records
//! - [`create`] - Create a new patient record
//! - [`update`] - Replace an existing patient record's fields
//! - [`delete`] - Delete a patient record
//! - [`doctors`] - List doctor reference rows
//! - [`health`] - Health check endpoint

pub mod create;
pub mod delete;
pub mod doctors;
pub mod health;
pub mod list;
pub mod update;

// Re-export handlers for convenience
pub use create::create_patient_handler;
pub use delete::delete_patient_handler;
pub use doctors::list_doctors_handler;
pub use health::health_handler;
pub use list::list_patients_handler;
pub use update::update_patient_handler;

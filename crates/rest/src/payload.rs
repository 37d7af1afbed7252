//! Request payload for patient create and update.
//!
//! Required fields are modeled as `Option` so missing values surface as a
//! 400 with a useful message instead of a serde rejection. Optional fields
//! that arrive empty are coerced to `None` so the store writes NULL rather
//! than an empty string.

use serde::Deserialize;

use intake_store::{PatientDraft, PatientUpdate, Severity};

use crate::error::{ApiError, ApiResult};
use crate::time::normalize_timestamp;

/// The JSON body accepted by `POST /api/patients` and `PUT /api/patients/{id}`.
///
/// The update path ignores `doctor`: doctor assignment is a create-time
/// decision in the intake workflow.
#[derive(Debug, Clone, Deserialize)]
pub struct PatientPayload {
    /// Patient name (required).
    #[serde(default)]
    pub name: Option<String>,
    /// Patient age in years (required).
    #[serde(default)]
    pub age: Option<i64>,
    /// Patient gender (required).
    #[serde(default)]
    pub gender: Option<String>,
    /// Event time in any accepted date-time shape.
    #[serde(default)]
    pub time: Option<String>,
    /// Where the injury occurred.
    #[serde(default)]
    pub location: Option<String>,
    /// Triage severity; must be one of low, medium, high, critical.
    #[serde(default)]
    pub severity: Option<String>,
    /// Affected body part.
    #[serde(rename = "bodyPart", default)]
    pub body_part: Option<String>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Free-text required action.
    #[serde(rename = "requiredAction", default)]
    pub required_action: Option<String>,
    /// Doctor reference (email); only honored on create.
    #[serde(default)]
    pub doctor: Option<String>,
}

impl PatientPayload {
    /// Validates and converts the payload into an insertable draft.
    pub fn into_draft(self) -> ApiResult<PatientDraft> {
        let doctor = optional_text(self.doctor.clone());
        let (name, age, gender, time, severity) = self.validate_common()?;

        Ok(PatientDraft {
            name,
            age,
            gender,
            time,
            location: optional_text(self.location),
            severity,
            body_part: optional_text(self.body_part),
            description: optional_text(self.description),
            required_action: optional_text(self.required_action),
            doctor,
        })
    }

    /// Validates and converts the payload into a wholesale field update.
    pub fn into_update(self) -> ApiResult<PatientUpdate> {
        let (name, age, gender, time, severity) = self.validate_common()?;

        Ok(PatientUpdate {
            name,
            age,
            gender,
            time,
            location: optional_text(self.location),
            severity,
            body_part: optional_text(self.body_part),
            description: optional_text(self.description),
            required_action: optional_text(self.required_action),
        })
    }

    /// The validation shared by both write paths: required fields, the
    /// severity enumeration, and the single time normalizer.
    fn validate_common(&self) -> ApiResult<(String, i64, String, Option<String>, Option<Severity>)> {
        let name = required_text("name", self.name.clone())?;
        let age = self.age.ok_or_else(|| missing_field("age"))?;
        let gender = required_text("gender", self.gender.clone())?;

        let time = match optional_text(self.time.clone()) {
            Some(raw) => Some(normalize_timestamp(&raw).ok_or_else(|| ApiError::BadRequest {
                message: format!("Unparseable time value: '{}'", raw),
            })?),
            None => None,
        };

        let severity = match optional_text(self.severity.clone()) {
            Some(raw) => Some(
                raw.parse::<Severity>()
                    .map_err(|message| ApiError::BadRequest { message })?,
            ),
            None => None,
        };

        Ok((name, age, gender, time, severity))
    }
}

fn missing_field(field: &str) -> ApiError {
    ApiError::BadRequest {
        message: format!("Missing required field: {}", field),
    }
}

fn required_text(field: &str, value: Option<String>) -> ApiResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(missing_field(field)),
    }
}

/// Coerces absent or empty strings to `None`.
fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

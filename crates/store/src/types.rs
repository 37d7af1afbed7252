//! Domain types for patient intake records and doctor reference data.
//!
//! Wire names are camelCase to match the JSON contract consumed by the
//! intake frontend; Rust fields stay snake_case with serde renames.

use std::fmt;
use std::str::FromStr;

use rusqlite::ToSql;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

/// Triage severity of the recorded injury.
///
/// Stored as its lowercase text form. Values outside this set are rejected
/// at the HTTP boundary before any SQL runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Minor injury, routine handling.
    Low,
    /// Needs attention within the visit.
    Medium,
    /// Urgent, prioritized over routine cases.
    High,
    /// Immediate intervention required.
    Critical,
}

impl Severity {
    /// Returns the canonical lowercase text form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            "critical" => Ok(Severity::Critical),
            other => Err(format!(
                "invalid severity '{}', expected one of: low, medium, high, critical",
                other
            )),
        }
    }
}

impl ToSql for Severity {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Severity {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        text.parse()
            .map_err(|e: String| FromSqlError::Other(e.into()))
    }
}

/// A stored patient intake record, as returned by list operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    /// Store-assigned identifier, unique and immutable.
    pub id: i64,
    /// Patient name.
    pub name: String,
    /// Patient age in years.
    pub age: i64,
    /// Patient gender.
    pub gender: String,
    /// Event time, normalized to `YYYY-MM-DD HH:MM:SS` local time.
    pub time: Option<String>,
    /// Where the injury occurred.
    pub location: Option<String>,
    /// Triage severity.
    pub severity: Option<Severity>,
    /// Affected body part.
    #[serde(rename = "bodyPart")]
    pub body_part: Option<String>,
    /// Free-text description of the injury.
    pub description: Option<String>,
    /// Free-text required action.
    #[serde(rename = "requiredAction")]
    pub required_action: Option<String>,
    /// Assigned doctor reference (email from the doctors table).
    pub doctor: Option<String>,
    /// Server-assigned creation timestamp.
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

/// Fields written when creating a new patient record.
///
/// `time` is expected to already be normalized by the HTTP layer; empty
/// optionals are stored as NULL.
#[derive(Debug, Clone, PartialEq)]
pub struct PatientDraft {
    /// Patient name (required).
    pub name: String,
    /// Patient age in years (required).
    pub age: i64,
    /// Patient gender (required).
    pub gender: String,
    /// Normalized event time.
    pub time: Option<String>,
    /// Where the injury occurred.
    pub location: Option<String>,
    /// Triage severity.
    pub severity: Option<Severity>,
    /// Affected body part.
    pub body_part: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Free-text required action.
    pub required_action: Option<String>,
    /// Doctor reference, validated against the doctors table on insert.
    pub doctor: Option<String>,
}

/// Fields replaced wholesale when updating an existing patient record.
///
/// Deliberately excludes `doctor`: the intake workflow does not reassign
/// doctors through the update path.
#[derive(Debug, Clone, PartialEq)]
pub struct PatientUpdate {
    /// Patient name (required).
    pub name: String,
    /// Patient age in years (required).
    pub age: i64,
    /// Patient gender (required).
    pub gender: String,
    /// Normalized event time.
    pub time: Option<String>,
    /// Where the injury occurred.
    pub location: Option<String>,
    /// Triage severity.
    pub severity: Option<Severity>,
    /// Affected body part.
    pub body_part: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Free-text required action.
    pub required_action: Option<String>,
}

/// A doctor reference row, used to populate client-side dropdowns.
///
/// The doctors table is owned and populated outside this system; only the
/// id and email columns are ever projected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    /// Doctor identifier.
    pub id: i64,
    /// Doctor email address.
    pub email: String,
}

//! PatientStorage implementation for SQLite.

use async_trait::async_trait;
use rusqlite::params;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::storage::PatientStorage;
use crate::types::{Doctor, Patient, PatientDraft, PatientUpdate};

use super::SqliteStore;

#[async_trait]
impl PatientStorage for SqliteStore {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn list_patients(&self) -> StoreResult<Vec<Patient>> {
        let conn = self.get_connection()?;

        let mut stmt = conn.prepare(
            "SELECT id, name, age, gender, time, location, severity, bodyPart,
                    description, requiredAction, doctor, createdAt
             FROM patients",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Patient {
                id: row.get(0)?,
                name: row.get(1)?,
                age: row.get(2)?,
                gender: row.get(3)?,
                time: row.get(4)?,
                location: row.get(5)?,
                severity: row.get(6)?,
                body_part: row.get(7)?,
                description: row.get(8)?,
                required_action: row.get(9)?,
                doctor: row.get(10)?,
                created_at: row.get(11)?,
            })
        })?;

        let patients = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(patients)
    }

    async fn create_patient(&self, draft: PatientDraft) -> StoreResult<i64> {
        let conn = self.get_connection()?;

        // Validate the doctor reference before writing anything.
        if let Some(ref doctor) = draft.doctor {
            let known: bool = conn
                .query_row(
                    "SELECT 1 FROM doctors WHERE email = ?1",
                    [doctor],
                    |_| Ok(true),
                )
                .unwrap_or(false);
            if !known {
                return Err(StoreError::UnknownDoctor {
                    doctor: doctor.clone(),
                });
            }
        }

        conn.execute(
            "INSERT INTO patients (name, age, gender, time, location, severity,
                                   bodyPart, description, requiredAction, doctor)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                draft.name,
                draft.age,
                draft.gender,
                draft.time,
                draft.location,
                draft.severity,
                draft.body_part,
                draft.description,
                draft.required_action,
                draft.doctor,
            ],
        )?;

        let id = conn.last_insert_rowid();
        debug!(id, "Patient record inserted");
        Ok(id)
    }

    async fn update_patient(&self, id: i64, update: PatientUpdate) -> StoreResult<()> {
        let conn = self.get_connection()?;

        let affected = conn.execute(
            "UPDATE patients
             SET name = ?1, age = ?2, gender = ?3, time = ?4, location = ?5,
                 severity = ?6, bodyPart = ?7, description = ?8, requiredAction = ?9
             WHERE id = ?10",
            params![
                update.name,
                update.age,
                update.gender,
                update.time,
                update.location,
                update.severity,
                update.body_part,
                update.description,
                update.required_action,
                id,
            ],
        )?;

        if affected == 0 {
            return Err(StoreError::NotFound { id });
        }

        debug!(id, "Patient record updated");
        Ok(())
    }

    async fn delete_patient(&self, id: i64) -> StoreResult<()> {
        let conn = self.get_connection()?;

        let affected = conn.execute("DELETE FROM patients WHERE id = ?1", [id])?;

        if affected == 0 {
            return Err(StoreError::NotFound { id });
        }

        debug!(id, "Patient record deleted");
        Ok(())
    }

    async fn list_doctors(&self) -> StoreResult<Vec<Doctor>> {
        let conn = self.get_connection()?;

        let mut stmt = conn.prepare("SELECT id, email FROM doctors")?;
        let rows = stmt.query_map([], |row| {
            Ok(Doctor {
                id: row.get(0)?,
                email: row.get(1)?,
            })
        })?;

        let doctors = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(doctors)
    }

    async fn health_check(&self) -> StoreResult<()> {
        let conn = self.get_connection()?;
        conn.query_row("SELECT 1", [], |_| Ok(()))?;
        Ok(())
    }
}

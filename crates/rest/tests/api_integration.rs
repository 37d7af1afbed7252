//! Intake API integration tests.
//!
//! Drives the real router against an in-memory SQLite store and checks:
//! - HTTP status codes (200, 201, 400, 404, 503-path excluded)
//! - Response body shapes (`{id}`, `{message}`, `{error, details?}`)
//! - Field normalization (time, null coercion) end to end

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use intake_rest::{AppState, ServerConfig};
use intake_store::SqliteStore;
use serde_json::{Value, json};

/// Creates a test server over a fresh in-memory store.
fn create_test_server() -> (TestServer, Arc<SqliteStore>) {
    let store = SqliteStore::in_memory().expect("Failed to create SQLite store");
    store.init_schema().expect("Failed to init schema");
    let store = Arc::new(store);

    let state = AppState::new(Arc::clone(&store), ServerConfig::for_testing());
    let app = intake_rest::routing::create_routes(state);
    let server = TestServer::new(app).expect("Failed to create test server");

    (server, store)
}

fn jane() -> Value {
    json!({
        "name": "Jane Doe",
        "age": 34,
        "gender": "F",
        "time": "2024-05-01T10:00:00"
    })
}

async fn create_patient(server: &TestServer, body: &Value) -> i64 {
    let response = server.post("/api/patients").json(body).await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().expect("id in body")
}

async fn list_patients(server: &TestServer) -> Vec<Value> {
    let response = server.get("/api/patients").await;
    response.assert_status_ok();
    response
        .json::<Value>()
        .as_array()
        .expect("array body")
        .clone()
}

// =============================================================================
// Create
// =============================================================================

mod create {
    use super::*;

    #[tokio::test]
    async fn test_create_returns_fresh_id() {
        let (server, _store) = create_test_server();

        let first = create_patient(&server, &jane()).await;
        let second = create_patient(&server, &jane()).await;

        assert!(first > 0);
        assert!(second > first);
    }

    #[tokio::test]
    async fn test_created_record_appears_in_list_with_nulls() {
        let (server, _store) = create_test_server();

        let id = create_patient(&server, &jane()).await;

        let patients = list_patients(&server).await;
        assert_eq!(patients.len(), 1);
        let record = &patients[0];
        assert_eq!(record["id"], json!(id));
        assert_eq!(record["name"], "Jane Doe");
        assert_eq!(record["age"], 34);
        assert_eq!(record["gender"], "F");
        assert_eq!(record["time"], "2024-05-01 10:00:00");
        // Unsubmitted optionals come back as null, not missing.
        assert_eq!(record["location"], Value::Null);
        assert_eq!(record["severity"], Value::Null);
        assert_eq!(record["bodyPart"], Value::Null);
        assert_eq!(record["doctor"], Value::Null);
        assert!(record["createdAt"].is_string());
    }

    #[tokio::test]
    async fn test_create_preserves_all_optional_fields() {
        let (server, store) = create_test_server();
        store.add_doctor("dr.ahmed@clinic.example").unwrap();

        let body = json!({
            "name": "Omar Haddad",
            "age": 41,
            "gender": "M",
            "time": "2024-05-02 08:15:00",
            "location": "site B",
            "severity": "high",
            "bodyPart": "ankle",
            "description": "twisted on stairs",
            "requiredAction": "x-ray",
            "doctor": "dr.ahmed@clinic.example"
        });
        create_patient(&server, &body).await;

        let record = &list_patients(&server).await[0];
        assert_eq!(record["location"], "site B");
        assert_eq!(record["severity"], "high");
        assert_eq!(record["bodyPart"], "ankle");
        assert_eq!(record["description"], "twisted on stairs");
        assert_eq!(record["requiredAction"], "x-ray");
        assert_eq!(record["doctor"], "dr.ahmed@clinic.example");
    }

    #[tokio::test]
    async fn test_create_missing_required_field_is_400() {
        let (server, _store) = create_test_server();

        for field in ["name", "age", "gender"] {
            let mut body = jane();
            body.as_object_mut().unwrap().remove(field);

            let response = server.post("/api/patients").json(&body).await;
            response.assert_status(StatusCode::BAD_REQUEST);

            let error = response.json::<Value>();
            assert!(
                error["error"].as_str().unwrap().contains(field),
                "error should name the field: {}",
                error
            );
        }

        // None of the rejected payloads left a row behind.
        assert!(list_patients(&server).await.is_empty());
    }

    #[tokio::test]
    async fn test_create_invalid_severity_is_400() {
        let (server, _store) = create_test_server();

        let mut body = jane();
        body["severity"] = json!("apocalyptic");

        let response = server.post("/api/patients").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(
            response.json::<Value>()["error"]
                .as_str()
                .unwrap()
                .contains("severity")
        );
    }

    #[tokio::test]
    async fn test_create_unknown_doctor_is_400() {
        let (server, _store) = create_test_server();

        let mut body = jane();
        body["doctor"] = json!("dr.nobody@clinic.example");

        let response = server.post("/api/patients").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(
            response.json::<Value>()["error"]
                .as_str()
                .unwrap()
                .contains("dr.nobody@clinic.example")
        );
        assert!(list_patients(&server).await.is_empty());
    }

    #[tokio::test]
    async fn test_create_unparseable_time_is_400() {
        let (server, _store) = create_test_server();

        let mut body = jane();
        body["time"] = json!("next tuesday");

        let response = server.post("/api/patients").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_without_time_stores_null() {
        let (server, _store) = create_test_server();

        let body = json!({"name": "No Time", "age": 20, "gender": "M"});
        create_patient(&server, &body).await;

        let record = &list_patients(&server).await[0];
        assert_eq!(record["time"], Value::Null);
    }
}

// =============================================================================
// Update
// =============================================================================

mod update {
    use super::*;

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let (server, _store) = create_test_server();
        let id = create_patient(&server, &jane()).await;
        let other = create_patient(&server, &jane()).await;

        let body = json!({
            "name": "Jane Smith",
            "age": 35,
            "gender": "F",
            "time": "2024-06-02T09:30:00",
            "severity": "critical",
            "bodyPart": "ankle"
        });
        let response = server.put(&format!("/api/patients/{id}")).json(&body).await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["message"], "Patient updated");

        let patients = list_patients(&server).await;
        let updated = patients
            .iter()
            .find(|p| p["id"] == json!(id))
            .expect("updated row present");
        assert_eq!(updated["name"], "Jane Smith");
        assert_eq!(updated["age"], 35);
        assert_eq!(updated["time"], "2024-06-02 09:30:00");
        assert_eq!(updated["severity"], "critical");
        // Wholesale replacement: fields absent from the payload go null.
        assert_eq!(updated["location"], Value::Null);

        // Other records are untouched.
        let untouched = patients.iter().find(|p| p["id"] == json!(other)).unwrap();
        assert_eq!(untouched["name"], "Jane Doe");
    }

    #[tokio::test]
    async fn test_update_ignores_doctor_field() {
        let (server, store) = create_test_server();
        store.add_doctor("dr.lee@clinic.example").unwrap();

        let mut body = jane();
        body["doctor"] = json!("dr.lee@clinic.example");
        let id = create_patient(&server, &body).await;

        let mut update = jane();
        update["doctor"] = json!("dr.someone.else@clinic.example");
        let response = server
            .put(&format!("/api/patients/{id}"))
            .json(&update)
            .await;
        response.assert_status_ok();

        let record = &list_patients(&server).await[0];
        assert_eq!(record["doctor"], "dr.lee@clinic.example");
    }

    #[tokio::test]
    async fn test_update_missing_id_is_404() {
        let (server, _store) = create_test_server();
        create_patient(&server, &jane()).await;

        let response = server.put("/api/patients/9999").json(&jane()).await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert!(
            response.json::<Value>()["error"]
                .as_str()
                .unwrap()
                .contains("9999")
        );

        // Nothing was created or altered.
        let patients = list_patients(&server).await;
        assert_eq!(patients.len(), 1);
        assert_eq!(patients[0]["name"], "Jane Doe");
    }

    #[tokio::test]
    async fn test_update_invalid_payload_is_400() {
        let (server, _store) = create_test_server();
        let id = create_patient(&server, &jane()).await;

        let body = json!({"age": 35, "gender": "F"});
        let response = server.put(&format!("/api/patients/{id}")).json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

// =============================================================================
// Delete
// =============================================================================

mod delete {
    use super::*;

    #[tokio::test]
    async fn test_delete_removes_record() {
        let (server, _store) = create_test_server();
        let id = create_patient(&server, &jane()).await;
        let kept = create_patient(&server, &jane()).await;

        let response = server.delete(&format!("/api/patients/{id}")).await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["message"], "Patient deleted");

        let patients = list_patients(&server).await;
        assert_eq!(patients.len(), 1);
        assert_eq!(patients[0]["id"], json!(kept));
    }

    #[tokio::test]
    async fn test_second_delete_is_404() {
        let (server, _store) = create_test_server();
        let id = create_patient(&server, &jane()).await;

        server
            .delete(&format!("/api/patients/{id}"))
            .await
            .assert_status_ok();
        server
            .delete(&format!("/api/patients/{id}"))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}

// =============================================================================
// Doctors and health
// =============================================================================

mod doctors {
    use super::*;

    #[tokio::test]
    async fn test_list_doctors_returns_all_rows() {
        let (server, store) = create_test_server();
        store.add_doctor("dr.ahmed@clinic.example").unwrap();
        store.add_doctor("dr.lee@clinic.example").unwrap();

        let response = server.get("/api/doctors").await;
        response.assert_status_ok();

        let doctors = response.json::<Vec<Value>>();
        assert_eq!(doctors.len(), 2);
        assert_eq!(doctors[0]["email"], "dr.ahmed@clinic.example");
        assert_eq!(doctors[1]["email"], "dr.lee@clinic.example");
        assert!(doctors[0]["id"].is_i64());
    }

    #[tokio::test]
    async fn test_list_doctors_empty_table() {
        let (server, _store) = create_test_server();

        let response = server.get("/api/doctors").await;
        response.assert_status_ok();
        assert!(response.json::<Vec<Value>>().is_empty());
    }
}

mod health {
    use super::*;

    #[tokio::test]
    async fn test_health_returns_200() {
        let (server, _store) = create_test_server();

        let response = server.get("/health").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["status"], "healthy");
    }
}

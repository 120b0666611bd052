use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, JobStatus};

use crate::common::MockBackend;

#[tokio::test]
async fn test_records_decode_with_unknown_statuses() {
    let backend = MockBackend::new()
        .get_ok(
            "/api/admin/jobs",
            json!([
                { "id": 10, "title": "Warehouse loader", "wage": 150000, "status": "open", "applicants": 4 },
                { "id": "j-11", "title": "Event crew", "status": "archived" }
            ]),
        )
        .start()
        .await;

    let jobs = backend
        .client()
        .list_jobs(&Default::default())
        .await
        .expect("jobs");

    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].id, "10");
    assert_eq!(jobs[0].wage, Some(150000.0));
    assert_eq!(jobs[0].applicant_count, 4);
    assert_eq!(jobs[1].id, "j-11");
    assert_eq!(jobs[1].status, JobStatus::Unknown);
    assert_eq!(jobs[1].wage, None);
}

#[tokio::test]
async fn test_unsuccessful_envelope_is_rejected() {
    let backend = MockBackend::new()
        .respond(
            Method::GET,
            "/api/admin/payments",
            StatusCode::OK,
            json!({ "success": false, "message": "Payments are being reconciled" }).to_string(),
        )
        .start()
        .await;

    let err = backend
        .client()
        .list_payments(&Default::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Rejected);
    assert_eq!(err.message, "Payments are being reconciled");
}

#[tokio::test]
async fn test_invalid_json_is_a_decode_error() {
    let backend = MockBackend::new()
        .respond(Method::GET, "/api/admin/ratings", StatusCode::OK, "<html>gateway</html>")
        .start()
        .await;

    let err = backend
        .client()
        .list_ratings(&Default::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Decode);
}

#[tokio::test]
async fn test_missing_data_is_a_decode_error() {
    let backend = MockBackend::new()
        .respond(
            Method::GET,
            "/api/admin/contracts",
            StatusCode::OK,
            json!({ "success": true }).to_string(),
        )
        .start()
        .await;

    let err = backend
        .client()
        .list_contracts(&Default::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Decode);
}

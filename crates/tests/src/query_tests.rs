use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{KycStatus, ListQuery, UserQuery, UserRole};

use crate::common::{worker_json, MockBackend};

#[tokio::test]
async fn test_empty_filters_send_no_query_string() {
    let backend = MockBackend::new()
        .get_ok("/api/admin/contracts", json!([]))
        .start()
        .await;

    backend
        .client()
        .list_contracts(&ListQuery::default())
        .await
        .expect("contracts");

    assert_eq!(backend.only_request().await.query, None);
}

#[tokio::test]
async fn test_list_filters_are_encoded() {
    let backend = MockBackend::new()
        .get_ok("/api/admin/jobs", json!([]))
        .start()
        .await;

    let query = ListQuery {
        search: "cuci piring".into(),
        status: "in_progress".into(),
    };
    backend.client().list_jobs(&query).await.expect("jobs");

    assert_eq!(
        backend.only_request().await.query.as_deref(),
        Some("search=cuci%20piring&status=in_progress")
    );
}

#[tokio::test]
async fn test_user_query_sends_role_and_kyc_status() {
    let backend = MockBackend::new()
        .get_ok("/api/admin/users", json!([worker_json(1, "Siti", "pending")]))
        .start()
        .await;

    let query = UserQuery {
        kyc_status: "pending".into(),
        ..UserQuery::for_role(UserRole::Worker)
    };
    let users = backend.client().list_users(&query).await.expect("users");

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, "1");
    assert_eq!(users[0].kyc_status, KycStatus::Pending);
    assert_eq!(users[0].rating, Some(4.5));
    assert_eq!(
        backend.only_request().await.query.as_deref(),
        Some("role=worker&kycStatus=pending")
    );
}

#[tokio::test]
async fn test_blank_search_is_omitted() {
    let backend = MockBackend::new()
        .get_ok("/api/admin/users", json!([]))
        .start()
        .await;

    let query = UserQuery {
        search: "   ".into(),
        ..UserQuery::for_role(UserRole::Employer)
    };
    backend.client().list_users(&query).await.expect("users");

    assert_eq!(
        backend.only_request().await.query.as_deref(),
        Some("role=employer")
    );
}

use serde_json::json;

use crate::common::MockBackend;

#[tokio::test]
async fn test_bearer_token_is_attached() {
    let backend = MockBackend::new()
        .get_ok("/api/admin/jobs", json!([]))
        .start()
        .await;

    let jobs = backend
        .client_with_token("tok-123")
        .list_jobs(&Default::default())
        .await
        .expect("jobs");

    assert!(jobs.is_empty());
    let request = backend.only_request().await;
    assert_eq!(request.authorization.as_deref(), Some("Bearer tok-123"));
}

#[tokio::test]
async fn test_no_token_sends_no_authorization() {
    let backend = MockBackend::new()
        .get_ok("/api/admin/ratings", json!([]))
        .start()
        .await;

    backend
        .client()
        .list_ratings(&Default::default())
        .await
        .expect("ratings");

    assert_eq!(backend.only_request().await.authorization, None);
}

#[tokio::test]
async fn test_empty_token_is_dropped() {
    let backend = MockBackend::new()
        .get_ok("/api/admin/payments", json!([]))
        .start()
        .await;

    let client = backend.client().with_token(Some(String::new()));
    assert!(!client.has_token());
    client
        .list_payments(&Default::default())
        .await
        .expect("payments");

    assert_eq!(backend.only_request().await.authorization, None);
}

use axum::http::Method;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{KycStatus, VerifyKycRequest};

use crate::common::{worker_json, MockBackend};

#[tokio::test]
async fn test_get_user_fetches_full_record() {
    let mut record = worker_json(42, "Budi", "pending");
    record["ktpUrl"] = json!("https://cdn.example/ktp/42.jpg");
    let backend = MockBackend::new()
        .get_ok("/api/admin/users/42", record)
        .start()
        .await;

    let user = backend.client().get_user("42").await.expect("user");

    assert_eq!(user.name, "Budi");
    assert_eq!(user.id_card_url.as_deref(), Some("https://cdn.example/ktp/42.jpg"));
}

#[tokio::test]
async fn test_verify_posts_status_and_note() {
    let backend = MockBackend::new()
        .post_ok("/api/admin/users/42/verify", worker_json(42, "Budi", "rejected"))
        .start()
        .await;

    let request = VerifyKycRequest::new(KycStatus::Rejected, "  ID photo is blurry ");
    let updated = backend
        .client_with_token("tok")
        .verify_kyc("42", &request)
        .await
        .expect("verify");

    assert_eq!(updated.kyc_status, KycStatus::Rejected);
    let seen = backend.only_request().await;
    assert_eq!(seen.method, Method::POST);
    assert_eq!(seen.path, "/api/admin/users/42/verify");
    assert_eq!(seen.authorization.as_deref(), Some("Bearer tok"));
    assert_eq!(
        seen.json_body(),
        json!({ "status": "rejected", "note": "ID photo is blurry" })
    );
}

#[tokio::test]
async fn test_verify_without_note_omits_it() {
    let backend = MockBackend::new()
        .post_ok("/api/admin/users/7/verify", worker_json(7, "Ayu", "verified"))
        .start()
        .await;

    backend
        .client()
        .verify_kyc("7", &VerifyKycRequest::new(KycStatus::Verified, ""))
        .await
        .expect("verify");

    assert_eq!(
        backend.only_request().await.json_body(),
        json!({ "status": "verified" })
    );
}

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, UserRole};

use crate::common::MockBackend;

#[tokio::test]
async fn test_login_returns_token_and_admin() {
    let backend = MockBackend::new()
        .post_ok(
            "/api/auth/login",
            json!({
                "token": "jwt-abc",
                "user": { "id": 1, "name": "Dewi", "email": "dewi@example.com", "role": "admin" }
            }),
        )
        .start()
        .await;

    let resp = backend
        .client()
        .login(" dewi@example.com ", "secret")
        .await
        .expect("login");

    assert_eq!(resp.token, "jwt-abc");
    assert_eq!(resp.user.id, "1");
    assert_eq!(resp.user.role, UserRole::Admin);

    let seen = backend.only_request().await;
    assert_eq!(seen.authorization, None);
    assert_eq!(
        seen.json_body(),
        json!({ "email": "dewi@example.com", "password": "secret" })
    );
}

#[tokio::test]
async fn test_bad_credentials_surface_backend_message() {
    let backend = MockBackend::new()
        .respond(
            Method::POST,
            "/api/auth/login",
            StatusCode::UNAUTHORIZED,
            json!({ "success": false, "message": "Invalid email or password" }).to_string(),
        )
        .start()
        .await;

    let err = backend
        .client()
        .login("dewi@example.com", "wrong")
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Invalid email or password");
}

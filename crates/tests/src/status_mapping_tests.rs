use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::AppErrorKind;

use crate::common::MockBackend;

async fn jobs_error(status: StatusCode, body: &str) -> shared_types::AppError {
    let backend = MockBackend::new()
        .respond(Method::GET, "/api/admin/jobs", status, body.to_string())
        .start()
        .await;
    backend
        .client_with_token("tok")
        .list_jobs(&Default::default())
        .await
        .unwrap_err()
}

#[tokio::test]
async fn test_401_is_unauthorized() {
    let err = jobs_error(
        StatusCode::UNAUTHORIZED,
        &json!({ "message": "jwt expired" }).to_string(),
    )
    .await;
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.status, Some(401));
    assert!(err.is_unauthorized());
    assert_eq!(err.message, "jwt expired");
}

#[tokio::test]
async fn test_403_is_forbidden() {
    let err = jobs_error(StatusCode::FORBIDDEN, "").await;
    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(err.message, "Forbidden");
}

#[tokio::test]
async fn test_422_is_bad_request_with_backend_message() {
    let err = jobs_error(
        StatusCode::UNPROCESSABLE_ENTITY,
        &json!({ "error": "status must be one of open, closed" }).to_string(),
    )
    .await;
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(err.message, "status must be one of open, closed");
}

#[tokio::test]
async fn test_500_is_server_error() {
    let err = jobs_error(StatusCode::INTERNAL_SERVER_ERROR, "oops").await;
    assert_eq!(err.kind, AppErrorKind::Server);
    assert_eq!(err.status, Some(500));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let backend = MockBackend::new().start().await;
    let err = backend.client().get_user("404").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.message, "Route not found");
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client::ApiClient::new(format!("http://{addr}/api"));
    let err = client.stats().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Network);
}

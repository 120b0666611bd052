use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::MockBackend;

#[tokio::test]
async fn test_stats_decode_with_aliases() {
    let backend = MockBackend::new()
        .get_ok(
            "/api/admin/stats",
            json!({
                "totalWorkers": 1250,
                "totalEmployers": 87,
                "activeJobs": 14,
                "activeContracts": 9,
                "pendingPayments": 3,
                "pendingKycReviews": 21,
                "settledVolume": "98500000"
            }),
        )
        .start()
        .await;

    let stats = backend.client_with_token("tok").stats().await.expect("stats");

    assert_eq!(stats.total_workers, 1250);
    assert_eq!(stats.pending_kyc, 21);
    assert_eq!(stats.settled_volume, Some(98_500_000.0));
    assert_eq!(backend.only_request().await.query, None);
}

#[tokio::test]
async fn test_missing_stats_default_to_zero() {
    let backend = MockBackend::new()
        .get_ok("/api/admin/stats", json!({ "totalWorkers": 5 }))
        .start()
        .await;

    let stats = backend.client().stats().await.expect("stats");

    assert_eq!(stats.total_workers, 5);
    assert_eq!(stats.active_jobs, 0);
    assert_eq!(stats.settled_volume, None);
}

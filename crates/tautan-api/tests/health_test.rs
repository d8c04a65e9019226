//! Health endpoint tests.

mod common;

use axum::http::StatusCode;

use common::Harness;

#[tokio::test]
async fn test_health_reports_unreachable_database() {
    let h = Harness::new();

    let (status, body) = h.get("/api/health").await;

    // The endpoint itself stays up; the failed database round trip is
    // reported in the body.
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], false);
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["connections"], 0);
}

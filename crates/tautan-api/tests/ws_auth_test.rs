//! Handshake authentication tests: the WebSocket upgrade must be refused
//! before any presence registration when the credential is missing or bad.

mod common;

use axum::http::StatusCode;

use common::Harness;

#[tokio::test]
async fn test_missing_token_refuses_upgrade() {
    let h = Harness::new();

    assert_eq!(h.upgrade_request("/ws").await, StatusCode::UNAUTHORIZED);
    assert_eq!(h.engine.connection_count(), 0);
}

#[tokio::test]
async fn test_garbage_token_refuses_upgrade() {
    let h = Harness::new();

    let status = h.upgrade_request("/ws?token=not.a.jwt").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(h.engine.connection_count(), 0);
}

#[tokio::test]
async fn test_expired_token_refuses_upgrade() {
    let h = Harness::new();
    let token = h.encoder.issue_with_expiry(7, -3600).unwrap();

    let status = h.upgrade_request(&format!("/ws?token={token}")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(h.engine.connection_count(), 0);
}

#[tokio::test]
async fn test_valid_token_switches_protocols() {
    let h = Harness::new();
    let token = h.encoder.issue(7).unwrap();

    let status = h.upgrade_request(&format!("/ws?token={token}")).await;
    assert_eq!(status, StatusCode::SWITCHING_PROTOCOLS);
    // Registration happens only once the socket is actually established,
    // which oneshot never completes.
    assert_eq!(h.engine.connection_count(), 0);
}

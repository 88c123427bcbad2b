mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use std::sync::Arc;
use user_service::routes::api_router;

#[tokio::test]
async fn test_health_endpoint_success() {
    let state = common::in_memory_state(common::ninjas());
    let server = TestServer::new(api_router(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["repository"]["status"], "ok");
    assert_eq!(json["checks"]["repository"]["message"], "3 users stored");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_endpoint_degraded() {
    let repo = Arc::new(common::ScriptedUserRepository {
        fault: true,
        ..Default::default()
    });
    let server = TestServer::new(api_router(common::scripted_state(repo))).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["repository"]["status"], "error");
}

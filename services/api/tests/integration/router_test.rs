//! Route-level tests against a server with a disconnected database. Only
//! paths that never reach a repository are exercised here; everything else
//! is covered by the usecase tests.

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::Value;
use uuid::Uuid;

use vanta_api::config::ApiConfig;
use vanta_api::router::build_router;
use vanta_api::state::AppState;
use vanta_auth_types::token::issue_token;

use crate::helpers::TEST_JWT_SECRET;

fn test_server() -> TestServer {
    let config = ApiConfig {
        database_url: "postgres://unused".to_owned(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        api_port: 0,
        admin_emails: vec![],
        upload_dir: "uploads".to_owned(),
        frontend_url: "http://localhost:3000".to_owned(),
        discord: None,
        steam_api_key: None,
    };
    let state = AppState {
        db: sea_orm::DatabaseConnection::default(),
        config: Arc::new(config),
        http: reqwest::Client::new(),
    };
    TestServer::new(build_router(state)).unwrap()
}

#[tokio::test]
async fn should_answer_health_probes() {
    let server = test_server();
    server.get("/healthz").await.assert_status_ok();
    server.get("/readyz").await.assert_status_ok();
}

#[tokio::test]
async fn should_reject_protected_routes_without_token() {
    let server = test_server();
    for path in ["/api/auth/me", "/api/profile", "/api/connections/steam/games"] {
        let response = server.get(path).await;
        response.assert_status_unauthorized();
    }
}

#[tokio::test]
async fn should_reject_garbage_bearer_token() {
    let server = test_server();
    let response = server
        .get("/api/auth/me")
        .authorization_bearer("not-a-jwt")
        .await;
    response.assert_status_unauthorized();
}

#[tokio::test]
async fn should_report_missing_discord_configuration() {
    let server = test_server();
    let response = server.get("/api/auth/discord/url").await;
    response.assert_status_internal_server_error();

    let body: Value = response.json();
    assert_eq!(body["kind"], "OAUTH_NOT_CONFIGURED");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn should_forbid_admin_routes_for_regular_users() {
    let server = test_server();
    let token = issue_token(Uuid::new_v4(), "alice", 0, TEST_JWT_SECRET).unwrap();

    let response = server
        .get(&format!("/api/admin/users/{}", Uuid::new_v4()))
        .authorization_bearer(&token)
        .await;
    response.assert_status_forbidden();

    let body: Value = response.json();
    assert_eq!(body["kind"], "FORBIDDEN");
}

use std::sync::Arc;

use sea_orm::Database;
use tracing::info;

use vanta_api::config::ApiConfig;
use vanta_api::router::build_router;
use vanta_api::state::AppState;

#[tokio::main]
async fn main() {
    vanta_core::tracing::init_tracing();

    let config = ApiConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        config: Arc::new(config),
        http: reqwest::Client::new(),
    };

    let router = build_router(state.clone());
    let addr = format!("0.0.0.0:{}", state.config.api_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("api service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}

// SPDX-License-Identifier: MIT

//! HTTP route handlers.

pub mod api;

use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

#[derive(Serialize)]
pub struct RootResponse {
    pub message: String,
}

/// Liveness response.
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "AniTrack Backend is running".to_string(),
    })
}

/// Diagnostic response for `/test`.
#[derive(Serialize)]
pub struct TestResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

/// Operational diagnostics: connection health and configuration presence.
///
/// Always returns 200; faults are captured into the body's text fields so
/// the route stays usable while the system is unhealthy.
async fn test_database(State(state): State<Arc<AppState>>) -> Json<TestResponse> {
    let health = state.db.health().await;
    let connected = health.status == "connected";

    Json(TestResponse {
        backend: "running".to_string(),
        database: health.status,
        database_url: presence(state.config.database_url.is_some()),
        database_name: presence(state.config.database_name.is_some()),
        connection_status: if connected { "Connected" } else { "Not Connected" }.to_string(),
        collections: health.collections,
    })
}

fn presence(set: bool) -> String {
    if set { "set" } else { "not set" }.to_string()
}

/// Build the complete router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    // Wide-open CORS: the API is meant to be consumable by any frontend.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/test", get(test_database))
        .merge(api::routes())
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

// SPDX-License-Identifier: MIT

//! AniTrack API Server
//!
//! Proxies anime metadata queries to the Jikan catalog API and persists
//! user watch-history and rating records in MongoDB.

use anitrack::{config::Config, db::MongoDb, services::JikanClient, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env();
    tracing::info!(port = config.port, "Starting AniTrack API");

    // Connect to MongoDB; missing parameters leave the gateway degraded
    // and only the persistence routes fail.
    let db = MongoDb::connect(config.database_url.as_deref(), config.database_name.as_deref()).await;

    let jikan = JikanClient::new().expect("Failed to build Jikan client");

    // Build shared state
    let state = Arc::new(AppState { config: config.clone(), db, jikan });

    // Build router
    let app = anitrack::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("anitrack=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}

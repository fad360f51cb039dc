// SPDX-License-Identifier: MIT

use anitrack::config::Config;
use anitrack::db::MongoDb;
use anitrack::routes::create_router;
use anitrack::services::JikanClient;
use anitrack::AppState;
use axum::body::Body;
use axum::response::Response;
use http_body_util::BodyExt;
use std::sync::Arc;

/// Check if a MongoDB instance is available via environment variable.
#[allow(dead_code)]
pub fn mongo_available() -> bool {
    std::env::var("MONGODB_URI").is_ok()
}

/// Skip test with message if no MongoDB instance is available.
#[macro_export]
macro_rules! require_mongo {
    () => {
        if !crate::common::mongo_available() {
            eprintln!("Skipping: MONGODB_URI not set");
            return;
        }
    };
}

/// Create a test database connection against the instance named by
/// MONGODB_URI, using a dedicated test database.
#[allow(dead_code)]
pub async fn test_db() -> MongoDb {
    let uri = std::env::var("MONGODB_URI").expect("MONGODB_URI not set");
    MongoDb::connect(Some(&uri), Some("anitrack_test")).await
}

/// Create a test app with an offline (degraded) store gateway.
#[allow(dead_code)]
pub fn create_test_app() -> axum::Router {
    create_test_app_with_jikan("http://127.0.0.1:9")
}

/// Create a test app around an existing store gateway.
#[allow(dead_code)]
pub fn create_test_app_with_db(db: MongoDb) -> axum::Router {
    let config = Config::test_default();
    let jikan = JikanClient::with_base_url("http://127.0.0.1:9".to_string())
        .expect("Failed to build Jikan client");

    let state = Arc::new(AppState { config, db, jikan });
    create_router(state)
}

/// Create a test app whose catalog client points at the given base URL.
///
/// The default test base URL is unroutable, so any handler that reaches
/// for the upstream fails with an upstream error.
#[allow(dead_code)]
pub fn create_test_app_with_jikan(base_url: &str) -> axum::Router {
    let config = Config::test_default();
    let db = MongoDb::new_offline();
    let jikan =
        JikanClient::with_base_url(base_url.to_string()).expect("Failed to build Jikan client");

    let state = Arc::new(AppState { config, db, jikan });
    create_router(state)
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("Body was not valid JSON")
}

// SPDX-License-Identifier: MIT

//! MongoDB gateway with degraded-mode handling.
//!
//! The connection is established once at process start. If the connection
//! parameters are absent or the client cannot be built, the gateway starts
//! in degraded mode and every store operation fails fast with a storage
//! error instead of retrying or blocking.

use crate::error::AppError;
use bson::Document;
use futures_util::TryStreamExt;

/// How many collection names the diagnostic report lists at most.
const HEALTH_COLLECTION_LIMIT: usize = 10;

/// MongoDB database client.
#[derive(Clone)]
pub struct MongoDb {
    db: Option<mongodb::Database>,
}

/// Best-effort connection diagnostics for the `/test` route.
#[derive(Debug)]
pub struct DbHealth {
    /// Human-readable connection state
    pub status: String,
    /// Up to ten known collection names
    pub collections: Vec<String>,
}

impl MongoDb {
    /// Connect to MongoDB from environment-provided parameters.
    ///
    /// Never fails: missing parameters or a bad URI put the gateway into
    /// degraded mode, where every operation returns a storage error.
    pub async fn connect(url: Option<&str>, name: Option<&str>) -> Self {
        let (Some(url), Some(name)) = (url, name) else {
            tracing::warn!("DATABASE_URL or DATABASE_NAME not set, starting without a database");
            return Self { db: None };
        };

        match mongodb::Client::with_uri_str(url).await {
            Ok(client) => {
                tracing::info!(database = name, "Connected to MongoDB");
                Self {
                    db: Some(client.database(name)),
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to initialize MongoDB client, starting without a database");
                Self { db: None }
            }
        }
    }

    /// Create a gateway with no database connection (degraded mode).
    ///
    /// All store operations will return an error if called.
    pub fn new_offline() -> Self {
        Self { db: None }
    }

    /// Helper to get the database handle or return an error if offline.
    fn get_db(&self) -> Result<&mongodb::Database, AppError> {
        self.db
            .as_ref()
            .ok_or_else(|| AppError::Storage("Database not connected".to_string()))
    }

    /// Insert a single document and return its assigned identifier as a string.
    pub async fn create_document(
        &self,
        collection: &str,
        doc: Document,
    ) -> Result<String, AppError> {
        let result = self
            .get_db()?
            .collection::<Document>(collection)
            .insert_one(doc)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        let id = match result.inserted_id.as_object_id() {
            Some(oid) => oid.to_hex(),
            None => result.inserted_id.to_string(),
        };
        Ok(id)
    }

    /// Fetch up to `limit` documents matching an equality filter, in the
    /// store's natural (insertion) order.
    ///
    /// An empty result is not an error; only connectivity and query faults
    /// are.
    pub async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, AppError> {
        let cursor = self
            .get_db()?
            .collection::<Document>(collection)
            .find(filter)
            .limit(limit)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::Storage(e.to_string()))
    }

    /// Report connection health and known collection names.
    ///
    /// Diagnostic only: every fault is captured into the status string
    /// rather than propagated, so this can be called while unhealthy.
    pub async fn health(&self) -> DbHealth {
        let Some(db) = self.db.as_ref() else {
            return DbHealth {
                status: "not connected".to_string(),
                collections: Vec::new(),
            };
        };

        match db.list_collection_names().await {
            Ok(mut names) => {
                names.truncate(HEALTH_COLLECTION_LIMIT);
                DbHealth {
                    status: "connected".to_string(),
                    collections: names,
                }
            }
            Err(e) => DbHealth {
                status: format!("connected but error: {}", e),
                collections: Vec::new(),
            },
        }
    }
}

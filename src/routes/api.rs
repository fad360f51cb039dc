// SPDX-License-Identifier: MIT

//! API routes: catalog proxy and watch-history/rating persistence.

use crate::db::{collections, to_transport};
use crate::error::{AppError, Result};
use crate::models::{Rating, WatchEntry};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use bson::doc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/search", get(search_anime))
        .route("/api/anime/{mal_id}", get(get_anime))
        .route("/api/suggestions", get(get_suggestions))
        .route("/api/watch", post(add_watch))
        .route("/api/watch/{user_id}", get(get_watch_history))
        .route("/api/rate", post(rate_anime))
        .route("/api/rate/{user_id}", get(get_user_ratings))
}

fn default_page() -> u32 {
    1
}

// ─── Catalog Proxy ───────────────────────────────────────────

#[derive(Deserialize)]
struct SearchQuery {
    q: String,
    #[serde(default = "default_page")]
    page: u32,
}

/// Search the catalog. The query is validated before any outbound call.
async fn search_anime(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Value>> {
    if params.q.chars().count() < 2 {
        return Err(AppError::BadRequest(
            "query must be at least 2 characters".to_string(),
        ));
    }
    Ok(Json(state.jikan.search(&params.q, params.page).await?))
}

/// Fetch a single catalog entry by its MyAnimeList id.
async fn get_anime(
    State(state): State<Arc<AppState>>,
    Path(mal_id): Path<i64>,
) -> Result<Json<Value>> {
    Ok(Json(state.jikan.anime(mal_id).await?))
}

#[derive(Deserialize)]
struct SuggestionsQuery {
    #[serde(default = "default_page")]
    page: u32,
}

/// Top-rated listing, relayed as suggestions.
async fn get_suggestions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SuggestionsQuery>,
) -> Result<Json<Value>> {
    Ok(Json(state.jikan.top(params.page).await?))
}

// ─── Watch History & Ratings ─────────────────────────────────

/// Response for successful writes.
#[derive(Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// Record a watch-history entry.
async fn add_watch(
    State(state): State<Arc<AppState>>,
    Json(entry): Json<WatchEntry>,
) -> Result<Json<CreatedResponse>> {
    entry
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let mut doc = bson::to_document(&entry).map_err(|e| AppError::Internal(e.into()))?;
    doc.insert("created_at", bson::DateTime::now());

    let id = state
        .db
        .create_document(collections::WATCH_ENTRIES, doc)
        .await?;
    Ok(Json(CreatedResponse { id }))
}

#[derive(Deserialize)]
struct WatchHistoryQuery {
    #[serde(default = "default_watch_limit")]
    limit: i64,
}

fn default_watch_limit() -> i64 {
    50
}

/// List a user's watch history, normalized for transport.
async fn get_watch_history(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Query(params): Query<WatchHistoryQuery>,
) -> Result<Json<Vec<Value>>> {
    let docs = state
        .db
        .get_documents(
            collections::WATCH_ENTRIES,
            doc! { "user_id": &user_id },
            params.limit,
        )
        .await?;
    Ok(Json(docs.into_iter().map(to_transport).collect()))
}

/// Record a rating.
async fn rate_anime(
    State(state): State<Arc<AppState>>,
    Json(rating): Json<Rating>,
) -> Result<Json<CreatedResponse>> {
    rating
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let mut doc = bson::to_document(&rating).map_err(|e| AppError::Internal(e.into()))?;
    doc.insert("created_at", bson::DateTime::now());

    let id = state.db.create_document(collections::RATINGS, doc).await?;
    Ok(Json(CreatedResponse { id }))
}

#[derive(Deserialize)]
struct RatingsQuery {
    #[serde(default = "default_rating_limit")]
    limit: i64,
}

fn default_rating_limit() -> i64 {
    100
}

/// List a user's ratings, normalized for transport.
async fn get_user_ratings(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Query(params): Query<RatingsQuery>,
) -> Result<Json<Vec<Value>>> {
    let docs = state
        .db
        .get_documents(
            collections::RATINGS,
            doc! { "user_id": &user_id },
            params.limit,
        )
        .await?;
    Ok(Json(docs.into_iter().map(to_transport).collect()))
}

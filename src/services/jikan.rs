// SPDX-License-Identifier: MIT

//! Jikan API client for catalog queries.
//!
//! Handles:
//! - Title search (popularity-ordered)
//! - Single-entry detail lookup
//! - Top-rated listing (used as suggestions)
//!
//! Responses are relayed verbatim; any transport fault, timeout or
//! non-success status is re-signaled as a single upstream error kind.

use crate::error::AppError;
use serde_json::Value;
use std::time::Duration;

const JIKAN_BASE: &str = "https://api.jikan.moe/v4";

/// Upstream request timeout. Jikan is rate-limited and can be slow under
/// load; a bounded wait keeps handlers from hanging on it.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Jikan API client.
#[derive(Clone)]
pub struct JikanClient {
    http: reqwest::Client,
    base_url: String,
}

impl JikanClient {
    /// Create a new Jikan client with a bounded request timeout.
    pub fn new() -> Result<Self, AppError> {
        Self::with_base_url(JIKAN_BASE.to_string())
    }

    /// Create a client against an alternate base URL (tests).
    pub fn with_base_url(base_url: String) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::Internal(e.into()))?;

        Ok(Self { http, base_url })
    }

    /// Search the catalog, ordered by popularity.
    pub async fn search(&self, q: &str, page: u32) -> Result<Value, AppError> {
        let url = format!("{}/anime", self.base_url);
        self.get_json(
            &url,
            &[
                ("q", q.to_string()),
                ("page", page.to_string()),
                ("order_by", "popularity".to_string()),
            ],
        )
        .await
    }

    /// Fetch one catalog entry's full record.
    pub async fn anime(&self, mal_id: i64) -> Result<Value, AppError> {
        let url = format!("{}/anime/{}", self.base_url, mal_id);
        self.get_json(&url, &[]).await
    }

    /// Fetch the top-rated listing, used as a stand-in for suggestions.
    pub async fn top(&self, page: u32) -> Result<Value, AppError> {
        let url = format!("{}/top/anime", self.base_url);
        self.get_json(&url, &[("page", page.to_string())]).await
    }

    /// Generic GET request relaying the upstream JSON body.
    async fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value, AppError> {
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))
    }
}

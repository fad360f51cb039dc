// SPDX-License-Identifier: MIT

//! Watch-history entry schema.

use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_status() -> String {
    "completed".to_string()
}

/// A single watch-history record, stored in the `watchentry` collection.
///
/// Title, image and genres are denormalized snapshots taken from the catalog
/// at write time; `mal_id` is the only link back to it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct WatchEntry {
    /// App-level user id or anonymous session id
    pub user_id: String,
    /// MyAnimeList ID from Jikan
    pub mal_id: i64,
    /// Anime title snapshot
    pub title: String,
    /// Cover image URL
    pub image_url: Option<String>,
    /// One of: completed, watching, dropped, on_hold, planned.
    /// Deliberately not enforced as an enum; the stored value is free-form.
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    #[validate(range(min = 0, message = "episodes_watched must be non-negative"))]
    pub episodes_watched: i64,
    #[validate(range(min = 0, message = "total_episodes must be non-negative"))]
    pub total_episodes: Option<i64>,
    /// Personal score on the 0-10 scale
    #[validate(range(min = 0.0, max = 10.0, message = "score must be between 0 and 10"))]
    pub score: Option<f64>,
    #[serde(default)]
    pub genres: Vec<String>,
}

// SPDX-License-Identifier: MIT

//! Rating schema.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A user's rating of a catalog entry, stored in the `rating` collection.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Rating {
    /// App-level user id or anonymous session id
    pub user_id: String,
    /// MyAnimeList ID from Jikan
    pub mal_id: i64,
    /// Score on the 0-10 scale
    #[validate(range(min = 0.0, max = 10.0, message = "score must be between 0 and 10"))]
    pub score: f64,
    /// Optional review text
    pub review: Option<String>,
}

// SPDX-License-Identifier: MIT

//! Account schema.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// User account stored in the `account` collection.
///
/// Identity is external; uniqueness of `username` is not enforced here.
/// No registration endpoint exists yet, the schema defines the stored shape.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Account {
    /// Display username
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,
    /// Optional email for account recovery
    pub email: Option<String>,
    /// Profile picture URL
    pub avatar_url: Option<String>,
    /// Free-form profile text
    pub bio: Option<String>,
}

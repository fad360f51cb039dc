// SPDX-License-Identifier: MIT

//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration, loaded once at startup.
///
/// The database parameters are optional: when either is absent the store
/// gateway starts in degraded mode and every persistence call fails fast,
/// while the catalog proxy routes keep working.
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection string (e.g. mongodb://localhost:27017)
    pub database_url: Option<String>,
    /// MongoDB database name
    pub database_name: Option<String>,
    /// Server port
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self {
            database_url: env::var("DATABASE_URL").ok(),
            database_name: env::var("DATABASE_NAME").ok(),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),
        }
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            database_url: None,
            database_name: None,
            port: 8000,
        }
    }
}

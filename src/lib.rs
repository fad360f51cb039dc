// SPDX-License-Identifier: MIT

//! AniTrack: anime watch-history and rating backend
//!
//! This crate provides the backend API that proxies catalog queries to
//! Jikan and persists user watch-history and rating records in MongoDB.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::MongoDb;
use services::JikanClient;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: MongoDb,
    pub jikan: JikanClient,
}

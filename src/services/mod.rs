// SPDX-License-Identifier: MIT

//! Services module - upstream integrations.

pub mod jikan;

pub use jikan::JikanClient;

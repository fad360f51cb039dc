// SPDX-License-Identifier: MIT

//! Database layer (MongoDB).

pub mod mongo;
pub mod normalize;

pub use mongo::{DbHealth, MongoDb};
pub use normalize::to_transport;

/// Collection names as constants.
///
/// One collection per record kind, named after the lowercased record name.
pub mod collections {
    /// Account documents. No account route exists yet; the name is fixed
    /// here so registration lands in the collection the schema expects.
    pub const ACCOUNTS: &str = "account";
    pub const WATCH_ENTRIES: &str = "watchentry";
    pub const RATINGS: &str = "rating";
}

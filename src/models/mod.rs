// SPDX-License-Identifier: MIT

//! Record schemas for stored documents.

pub mod account;
pub mod rating;
pub mod watch;

pub use account::Account;
pub use rating::Rating;
pub use watch::WatchEntry;

// SPDX-License-Identifier: MIT

//! Transport normalization for stored documents.
//!
//! Raw documents carry BSON-native values that have no direct JSON form:
//! the store-assigned ObjectId and datetime fields. This module converts a
//! document into a JSON value safe to return to any client.

use bson::{Bson, Document};
use serde_json::Value;

/// Convert a stored document into a JSON-safe value.
///
/// Top-level ObjectIds become their 24-character hex string, datetimes
/// become RFC 3339 strings, everything else passes through as plain JSON.
/// Total over any document the gateway can produce.
pub fn to_transport(doc: Document) -> Value {
    let mut map = serde_json::Map::with_capacity(doc.len());
    for (key, value) in doc {
        let json = match value {
            Bson::ObjectId(oid) => Value::String(oid.to_hex()),
            Bson::DateTime(dt) => Value::String(dt.to_chrono().to_rfc3339()),
            other => other.into_relaxed_extjson(),
        };
        map.insert(key, json);
    }
    Value::Object(map)
}

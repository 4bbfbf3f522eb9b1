//! Document type indexed into the search engine.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single record to be indexed.
///
/// The `body` is a JSON-encoded string kept opaque by the gateway so that
/// callers can index arbitrary payloads without this layer knowing their
/// schema. The `id` is caller-assigned and must be unique within an index;
/// re-indexing the same id overwrites the stored document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Caller-assigned identifier, unique within an index.
    pub id: String,
    /// JSON-encoded document body.
    pub body: String,
}

impl Document {
    /// Create a document from an already-encoded JSON body.
    pub fn new(id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            body: body.into(),
        }
    }

    /// Create a document by encoding a JSON value as the body.
    ///
    /// Returns an error if the value cannot be serialized (e.g., a map with
    /// non-string keys).
    pub fn from_value(id: impl Into<String>, value: &Value) -> Result<Self, serde_json::Error> {
        Ok(Self {
            id: id.into(),
            body: serde_json::to_string(value)?,
        })
    }
}
